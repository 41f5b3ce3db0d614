//! REST client for the auth API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the stored
//! session token attached as a bearer header.
//! Server-side (SSR): stubs returning `ApiError::Network` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Status and body decoding live in
//! plain functions so the mapping from HTTP responses to errors is testable
//! without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::de::DeserializeOwned;

use super::types::{AuthResponse, Credentials, RegistrationRequest, UploadResult, UserRecord};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
use crate::config::ApiConfig;
#[cfg(feature = "hydrate")]
use crate::util::token_store::TokenStore;
use crate::util::token_store::LocalStorageTokenStore;

/// Message shown when a failure carries no usable server message.
pub const FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";

/// Failure talking to the auth API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("server responded with status {status}")]
    Status { status: u16, message: Option<String> },
    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Non-empty `message` from the server's error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message: Some(message), .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    /// Text to show the user: the server message, else the generic fallback.
    pub fn user_message(&self) -> String {
        self.server_message().unwrap_or(FALLBACK_MESSAGE).to_owned()
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }

    #[cfg(not(feature = "hydrate"))]
    fn server_unavailable() -> Self {
        Self::Network("not available on server".to_owned())
    }
}

/// Image picked in the signup form's file input.
#[derive(Clone, Debug)]
pub struct ImageFile {
    name: String,
    #[cfg(feature = "hydrate")]
    file: web_sys::File,
}

impl ImageFile {
    #[cfg(feature = "hydrate")]
    pub fn from_file(file: web_sys::File) -> Self {
        Self { name: file.name(), file }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Remote auth endpoints the submission flow depends on.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Raw image type accepted by `upload_image`.
    type Image;

    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError>;

    async fn register(&self, request: &RegistrationRequest) -> Result<AuthResponse, ApiError>;

    async fn upload_image(&self, image: &Self::Image) -> Result<UploadResult, ApiError>;

    /// Fetch the user owning the stored session token.
    async fn fetch_current_user(&self) -> Result<UserRecord, ApiError>;
}

/// `AuthApi` over `fetch`, rooted at `ApiConfig::base_url`.
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    config: ApiConfig,
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    tokens: LocalStorageTokenStore,
}

impl HttpAuthApi {
    pub fn new(config: ApiConfig) -> Self {
        let tokens = LocalStorageTokenStore::new(config.token_key.clone());
        Self { config, tokens }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    #[cfg(feature = "hydrate")]
    fn prepare(&self, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        let builder = builder.header("Accept", "application/json");
        match self.tokens.load() {
            Some(token) => builder.header("Authorization", &bearer_header(&token)),
            None => builder,
        }
    }

    #[cfg(feature = "hydrate")]
    async fn post_json<T: serde::Serialize>(&self, path: &str, payload: &T) -> Result<(u16, String), ApiError> {
        let url = self.config.endpoint(path);
        let resp = self
            .prepare(gloo_net::http::Request::post(&url))
            .json(payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_response(resp).await
    }
}

impl AuthApi for HttpAuthApi {
    type Image = ImageFile;

    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let (status, body) = self.post_json(&self.config.login_path, credentials).await?;
            decode_response(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(ApiError::server_unavailable())
        }
    }

    async fn register(&self, request: &RegistrationRequest) -> Result<AuthResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let (status, body) = self.post_json(&self.config.register_path, request).await?;
            decode_response(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::server_unavailable())
        }
    }

    async fn upload_image(&self, image: &ImageFile) -> Result<UploadResult, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let form = web_sys::FormData::new().map_err(js_error)?;
            form.append_with_blob_and_filename("image", &image.file, &image.name)
                .map_err(js_error)?;
            let url = self.config.endpoint(&self.config.upload_image_path);
            let resp = self
                .prepare(gloo_net::http::Request::post(&url))
                .body(form)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let (status, body) = read_response(resp).await?;
            decode_response(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = image;
            Err(ApiError::server_unavailable())
        }
    }

    async fn fetch_current_user(&self) -> Result<UserRecord, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(&self.config.current_user_path);
            let resp = self
                .prepare(gloo_net::http::Request::get(&url))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let (status, body) = read_response(resp).await?;
            decode_response(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::server_unavailable())
        }
    }
}

#[cfg(feature = "hydrate")]
async fn read_response(resp: gloo_net::http::Response) -> Result<(u16, String), ApiError> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    Ok((status, body))
}

#[cfg(feature = "hydrate")]
fn js_error(value: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Turn a status + raw body into the expected payload or an `ApiError`.
#[cfg(any(test, feature = "hydrate"))]
fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !is_success(status) {
        let message = serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| b.message);
        return Err(ApiError::Status { status, message });
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
