use leptos::logging::log;

use super::{AuthFlow, Navigator, SubmitError, SubmitOutcome, settle};
use crate::net::api::AuthApi;
use crate::net::types::Credentials;
use crate::state::auth::UserSession;
use crate::state::form::{InFlight, StatusCell, SubmitPhase};
use crate::util::token_store::TokenStore;
use crate::util::validate::validate_login;

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

impl<A, T, S, N> AuthFlow<A, T, S, N>
where
    A: AuthApi,
    T: TokenStore,
    S: UserSession,
    N: Navigator,
{
    /// Run one login attempt against `status`.
    ///
    /// Ignored while an earlier attempt on the same status is in flight.
    pub async fn submit_login<C: StatusCell>(&self, status: &C, credentials: Credentials) -> SubmitOutcome {
        let Some(attempt) = InFlight::begin(status) else {
            log!("login ignored: submission already in flight");
            return SubmitOutcome::Ignored;
        };
        let result = self.run_login(status, &credentials).await;
        settle(&attempt, "login", result)
    }

    async fn run_login<C: StatusCell>(&self, status: &C, credentials: &Credentials) -> Result<(), SubmitError> {
        validate_login(credentials)?;
        status.set_phase(SubmitPhase::Submitting);
        let response = self.api.login(credentials).await.map_err(SubmitError::Auth)?;
        self.establish_session(response)
    }
}
