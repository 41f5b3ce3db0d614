//! Submission flow for the login and signup forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages hand a form snapshot and their status signal to `AuthFlow`; the flow
//! validates, calls the API, and on success persists the token, publishes the
//! user, and navigates home. Every collaborator is a trait so the same code
//! runs against `gloo-net`/`localStorage` in the browser and fakes in tests.
//!
//! ERROR HANDLING
//! ==============
//! Failures stop here. They are logged with their stage and reduced to one
//! user-visible message on the form status; nothing is retried.

mod login;
mod signup;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
#[cfg(test)]
pub(crate) mod test_support;

use leptos::logging::{log, warn};
use leptos::prelude::RwSignal;

use crate::config::{ApiConfig, HOME_ROUTE, LOGIN_ROUTE};
use crate::net::api::{ApiError, AuthApi, FALLBACK_MESSAGE, HttpAuthApi};
use crate::net::types::AuthResponse;
use crate::state::auth::{AuthState, UserSession};
use crate::state::form::{InFlight, StatusCell};
use crate::util::token_store::{LocalStorageTokenStore, TokenStore};
use crate::util::validate::ValidationError;

/// Route changes requested by the flow.
pub trait Navigator {
    fn navigate(&self, route: &str);
}

impl<F: Fn(&str)> Navigator for F {
    fn navigate(&self, route: &str) {
        self(route);
    }
}

/// Which network step of a submission failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitStage {
    Upload,
    Auth,
}

/// Why a submission did not end authenticated.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("profile image upload failed: {0}")]
    Upload(ApiError),
    #[error("auth request failed: {0}")]
    Auth(ApiError),
    #[error("auth response did not include a session token")]
    MissingToken,
}

impl SubmitError {
    pub fn stage(&self) -> Option<SubmitStage> {
        match self {
            Self::Upload(_) => Some(SubmitStage::Upload),
            Self::Auth(_) | Self::MissingToken => Some(SubmitStage::Auth),
            Self::Validation(_) => None,
        }
    }

    /// The server accepted the request but sent no usable session. Such an
    /// attempt ends without a message on the form.
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::MissingToken | Self::Auth(ApiError::Decode(_)))
    }

    /// Message shown on the form. Upload and auth failures read the same.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::Upload(err) | Self::Auth(err) => err.user_message(),
            Self::MissingToken => FALLBACK_MESSAGE.to_owned(),
        }
    }
}

/// How one call to `submit_login`/`submit_registration` ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another attempt was already in flight; nothing happened.
    Ignored,
    Authenticated,
    /// 2xx without a session token; busy cleared, nothing shown.
    NoSession(SubmitError),
    Failed(SubmitError),
}

/// Validate → (upload) → authenticate → persist → publish → navigate.
pub struct AuthFlow<A, T, S, N> {
    api: A,
    tokens: T,
    session: S,
    navigator: N,
    home_route: String,
    login_route: String,
}

impl<N: Navigator> AuthFlow<HttpAuthApi, LocalStorageTokenStore, RwSignal<AuthState>, N> {
    /// Flow wired to `fetch`, `localStorage`, and the app-wide auth signal.
    pub fn browser(config: &ApiConfig, auth: RwSignal<AuthState>, navigator: N) -> Self {
        let tokens = LocalStorageTokenStore::new(config.token_key.clone());
        Self::new(HttpAuthApi::new(config.clone()), tokens, auth, navigator)
            .with_routes(config.home_route.clone(), config.login_route.clone())
    }
}

impl<A, T, S, N> AuthFlow<A, T, S, N>
where
    A: AuthApi,
    T: TokenStore,
    S: UserSession,
    N: Navigator,
{
    pub fn new(api: A, tokens: T, session: S, navigator: N) -> Self {
        Self {
            api,
            tokens,
            session,
            navigator,
            home_route: HOME_ROUTE.to_owned(),
            login_route: LOGIN_ROUTE.to_owned(),
        }
    }

    #[must_use]
    pub fn with_routes(mut self, home_route: impl Into<String>, login_route: impl Into<String>) -> Self {
        self.home_route = home_route.into();
        self.login_route = login_route.into();
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn tokens(&self) -> &T {
        &self.tokens
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    /// Exchange a stored token for the current user.
    ///
    /// Returns `true` when a user is present afterwards. A 401 drops the
    /// stored token; any other failure leaves it for the next attempt.
    pub async fn restore_session(&self) -> bool {
        if self.session.current_user().is_some() {
            return true;
        }
        if self.tokens.load().is_none() {
            self.session.clear_user();
            return false;
        }
        match self.api.fetch_current_user().await {
            Ok(user) => {
                self.session.set_current_user(user);
                log!("session restored from stored token");
                true
            }
            Err(err) => {
                warn!("session restore failed: {err}");
                if err.is_unauthorized() {
                    self.tokens.clear();
                }
                self.session.clear_user();
                false
            }
        }
    }

    /// Forget the token and user, then go to the login route.
    pub fn logout(&self) {
        self.tokens.clear();
        self.session.clear_user();
        self.navigator.navigate(&self.login_route);
    }

    /// Success side effects, in order: persist token, publish user, navigate.
    fn establish_session(&self, response: AuthResponse) -> Result<(), SubmitError> {
        if response.token.is_empty() {
            return Err(SubmitError::MissingToken);
        }
        self.tokens.store(&response.token);
        self.session.set_current_user(response.user);
        self.navigator.navigate(&self.home_route);
        Ok(())
    }
}

/// Record how an attempt ended on its form status.
fn settle<C: StatusCell>(attempt: &InFlight<'_, C>, form: &str, result: Result<(), SubmitError>) -> SubmitOutcome {
    match result {
        Ok(()) => {
            attempt.succeed();
            SubmitOutcome::Authenticated
        }
        Err(err) if err.is_silent() => {
            warn!("{form} answered without a session: {err}");
            attempt.abandon();
            SubmitOutcome::NoSession(err)
        }
        Err(err) => {
            if let Some(stage) = err.stage() {
                warn!("{form} failed at {stage:?} stage: {err}");
            }
            attempt.fail(err.user_message());
            SubmitOutcome::Failed(err)
        }
    }
}
