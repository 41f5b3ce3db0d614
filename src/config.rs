//! API endpoint and route configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The same config value is provided as Leptos context by `App` and consumed
//! by pages when they build the HTTP client and token store, so paths and the
//! storage key are never repeated as string literals elsewhere.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const LOGIN_PATH: &str = "/api/v1/auth/login";
pub const REGISTER_PATH: &str = "/api/v1/auth/register";
pub const UPLOAD_IMAGE_PATH: &str = "/api/v1/auth/upload-image";
pub const CURRENT_USER_PATH: &str = "/api/v1/auth/getUser";
pub const TOKEN_KEY: &str = "token";
pub const HOME_ROUTE: &str = "/dashboard";
pub const LOGIN_ROUTE: &str = "/login";

/// Where the auth API lives and where the client goes after auth events.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub login_path: String,
    pub register_path: String,
    pub upload_image_path: String,
    pub current_user_path: String,
    /// `localStorage` key holding the session token.
    pub token_key: String,
    /// Route shown after a successful login or registration.
    pub home_route: String,
    /// Route shown after logout.
    pub login_route: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: option_env!("SPENDIX_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL).to_owned(),
            login_path: LOGIN_PATH.to_owned(),
            register_path: REGISTER_PATH.to_owned(),
            upload_image_path: UPLOAD_IMAGE_PATH.to_owned(),
            current_user_path: CURRENT_USER_PATH.to_owned(),
            token_key: TOKEN_KEY.to_owned(),
            home_route: HOME_ROUTE.to_owned(),
            login_route: LOGIN_ROUTE.to_owned(),
        }
    }
}

impl ApiConfig {
    /// Config pointing at `base_url` with every other value defaulted.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), ..Self::default() }
    }

    /// Join the base URL and `path` with exactly one `/` between them.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if base.is_empty() {
            return format!("/{path}");
        }
        format!("{base}/{path}")
    }
}
