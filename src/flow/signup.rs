use leptos::logging::{log, warn};

use super::{AuthFlow, Navigator, SubmitError, SubmitOutcome, settle};
use crate::net::api::{ApiError, AuthApi};
use crate::net::types::SignUpForm;
use crate::state::auth::UserSession;
use crate::state::form::{InFlight, StatusCell, SubmitPhase};
use crate::util::token_store::TokenStore;
use crate::util::validate::validate_registration;

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

impl<A, T, S, N> AuthFlow<A, T, S, N>
where
    A: AuthApi,
    T: TokenStore,
    S: UserSession,
    N: Navigator,
{
    /// Run one signup attempt against `status`, uploading the profile image
    /// first when one was picked.
    pub async fn submit_registration<C: StatusCell>(
        &self,
        status: &C,
        form: SignUpForm<A::Image>,
    ) -> SubmitOutcome {
        let Some(attempt) = InFlight::begin(status) else {
            log!("signup ignored: submission already in flight");
            return SubmitOutcome::Ignored;
        };
        let result = self.run_registration(status, form).await;
        settle(&attempt, "signup", result)
    }

    async fn run_registration<C: StatusCell>(
        &self,
        status: &C,
        form: SignUpForm<A::Image>,
    ) -> Result<(), SubmitError> {
        validate_registration(&form.full_name, &form.email, &form.password)?;
        let profile_image_url = match form.profile_image.as_ref() {
            Some(image) => {
                status.set_phase(SubmitPhase::Uploading);
                self.upload_profile_image(image).await?
            }
            None => String::new(),
        };
        status.set_phase(SubmitPhase::Submitting);
        let request = form.into_request(profile_image_url);
        let response = self.api.register(&request).await.map_err(SubmitError::Auth)?;
        self.establish_session(response)
    }

    /// Upload stage of signup; yields the hosted URL, `""` if none came back.
    ///
    /// A 2xx body that does not parse counts as no URL.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Upload` when the upload request fails.
    pub async fn upload_profile_image(&self, image: &A::Image) -> Result<String, SubmitError> {
        match self.api.upload_image(image).await {
            Ok(uploaded) => Ok(uploaded.image_url),
            Err(ApiError::Decode(err)) => {
                warn!("upload response unreadable, registering without image: {err}");
                Ok(String::new())
            }
            Err(err) => Err(SubmitError::Upload(err)),
        }
    }
}
