//! In-memory collaborators for driving `AuthFlow` in unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;

use super::AuthFlow;
use crate::net::api::{ApiError, AuthApi};
use crate::net::types::{AuthResponse, Credentials, RegistrationRequest, UploadResult, UserRecord};
use crate::state::auth::LocalSession;
use crate::state::form::FormStatus;
use crate::util::token_store::MemoryTokenStore;

/// One recorded API call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Login(Credentials),
    Register(RegistrationRequest),
    Upload(String),
    FetchUser,
}

/// Scripted `AuthApi`. Unscripted calls fail with a network error.
#[derive(Default)]
pub struct FakeApi {
    pub auth_reply: Option<Result<AuthResponse, ApiError>>,
    pub upload_reply: Option<Result<UploadResult, ApiError>>,
    pub user_reply: Option<Result<UserRecord, ApiError>>,
    pub calls: RefCell<Vec<Call>>,
    /// Status whose `busy` flag is sampled on every call.
    pub watched: Option<Rc<RefCell<FormStatus>>>,
    pub busy_seen: RefCell<Vec<bool>>,
    /// The first login or upload waits on this before answering.
    pub gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl FakeApi {
    pub fn authenticating(token: &str) -> Self {
        Self {
            auth_reply: Some(Ok(AuthResponse {
                token: token.to_owned(),
                user: UserRecord(serde_json::json!({ "id": "u1", "fullName": "John Doe" })),
            })),
            ..Self::default()
        }
    }

    pub fn rejecting(status: u16, message: Option<&str>) -> Self {
        Self {
            auth_reply: Some(Err(ApiError::Status { status, message: message.map(str::to_owned) })),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        if let Some(watched) = &self.watched {
            self.busy_seen.borrow_mut().push(watched.borrow().busy);
        }
        self.calls.borrow_mut().push(call);
    }

    async fn hold(&self) {
        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
    }
}

fn unscripted<T>() -> Result<T, ApiError> {
    Err(ApiError::Network("no reply scripted".to_owned()))
}

impl AuthApi for FakeApi {
    type Image = String;

    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        self.record(Call::Login(credentials.clone()));
        self.hold().await;
        self.auth_reply.clone().unwrap_or_else(unscripted)
    }

    async fn register(&self, request: &RegistrationRequest) -> Result<AuthResponse, ApiError> {
        self.record(Call::Register(request.clone()));
        self.auth_reply.clone().unwrap_or_else(unscripted)
    }

    async fn upload_image(&self, image: &String) -> Result<UploadResult, ApiError> {
        self.record(Call::Upload(image.clone()));
        self.hold().await;
        self.upload_reply.clone().unwrap_or_else(unscripted)
    }

    async fn fetch_current_user(&self) -> Result<UserRecord, ApiError> {
        self.record(Call::FetchUser);
        self.user_reply.clone().unwrap_or_else(unscripted)
    }
}

pub type Visits = Rc<RefCell<Vec<String>>>;

/// Flow over `api` with fresh in-memory token store and session, plus the
/// list of routes it navigates to.
pub fn flow_with(
    api: FakeApi,
    tokens: MemoryTokenStore,
) -> (AuthFlow<FakeApi, MemoryTokenStore, LocalSession, impl Fn(&str)>, Visits) {
    let visits: Visits = Rc::default();
    let sink = Rc::clone(&visits);
    let navigator = move |route: &str| sink.borrow_mut().push(route.to_owned());
    (AuthFlow::new(api, tokens, LocalSession::default(), navigator), visits)
}

pub fn flow(api: FakeApi) -> (AuthFlow<FakeApi, MemoryTokenStore, LocalSession, impl Fn(&str)>, Visits) {
    flow_with(api, MemoryTokenStore::default())
}
