use futures::executor::block_on;
use serde_json::json;

use super::test_support::{Call, FakeApi, flow, flow_with};
use super::*;
use crate::net::types::UserRecord;
use crate::util::token_store::MemoryTokenStore;

// =============================================================
// SubmitError
// =============================================================

#[test]
fn validation_errors_have_no_stage() {
    let err = SubmitError::from(ValidationError::MissingName);
    assert_eq!(err.stage(), None);
    assert_eq!(err.user_message(), "Please enter your name");
}

#[test]
fn upload_and_auth_errors_share_the_user_message() {
    let cause = ApiError::Status { status: 500, message: None };
    let upload = SubmitError::Upload(cause.clone());
    let auth = SubmitError::Auth(cause);
    assert_eq!(upload.stage(), Some(SubmitStage::Upload));
    assert_eq!(auth.stage(), Some(SubmitStage::Auth));
    assert_eq!(upload.user_message(), auth.user_message());
}

#[test]
fn missing_token_and_unreadable_body_are_silent() {
    assert!(SubmitError::MissingToken.is_silent());
    assert_eq!(SubmitError::MissingToken.stage(), Some(SubmitStage::Auth));
    assert!(SubmitError::Auth(ApiError::Decode("eof".to_owned())).is_silent());
}

#[test]
fn rejections_and_upload_failures_are_not_silent() {
    assert!(!SubmitError::Auth(ApiError::Status { status: 401, message: None }).is_silent());
    assert!(!SubmitError::Auth(ApiError::Network("offline".to_owned())).is_silent());
    assert!(!SubmitError::Upload(ApiError::Decode("eof".to_owned())).is_silent());
    assert!(!SubmitError::from(ValidationError::InvalidEmail).is_silent());
}

// =============================================================
// restore_session
// =============================================================

#[test]
fn restore_without_token_skips_network() {
    let (flow, _) = flow(FakeApi::default());

    assert!(!block_on(flow.restore_session()));
    assert!(flow.api().calls().is_empty());
    assert!(!flow.session().state().loading);
}

#[test]
fn restore_with_token_sets_user() {
    let api = FakeApi { user_reply: Some(Ok(UserRecord(json!({ "id": "u1" })))), ..FakeApi::default() };
    let (flow, _) = flow_with(api, MemoryTokenStore::with_token("abc123"));

    assert!(block_on(flow.restore_session()));
    assert_eq!(flow.api().calls(), vec![Call::FetchUser]);
    assert_eq!(flow.session().current_user().and_then(|u| u.str_field("id").map(str::to_owned)), Some("u1".to_owned()));
}

#[test]
fn restore_with_existing_user_is_a_no_op() {
    let (flow, _) = flow_with(FakeApi::default(), MemoryTokenStore::with_token("abc123"));
    flow.session().set_current_user(UserRecord(json!({ "id": "u1" })));

    assert!(block_on(flow.restore_session()));
    assert!(flow.api().calls().is_empty());
}

#[test]
fn restore_unauthorized_drops_token() {
    let api = FakeApi { user_reply: Some(Err(ApiError::Status { status: 401, message: None })), ..FakeApi::default() };
    let (flow, _) = flow_with(api, MemoryTokenStore::with_token("expired"));

    assert!(!block_on(flow.restore_session()));
    assert_eq!(flow.tokens().load(), None);
    assert!(flow.session().current_user().is_none());
}

#[test]
fn restore_network_failure_keeps_token() {
    let api = FakeApi { user_reply: Some(Err(ApiError::Network("offline".to_owned()))), ..FakeApi::default() };
    let (flow, _) = flow_with(api, MemoryTokenStore::with_token("abc123"));

    assert!(!block_on(flow.restore_session()));
    assert_eq!(flow.tokens().load().as_deref(), Some("abc123"));
    assert!(!flow.session().state().loading);
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_token_and_user_then_navigates_to_login() {
    let (flow, visits) = flow_with(FakeApi::default(), MemoryTokenStore::with_token("abc123"));
    flow.session().set_current_user(UserRecord(json!({ "id": "u1" })));

    flow.logout();

    assert_eq!(flow.tokens().load(), None);
    assert!(flow.session().current_user().is_none());
    assert_eq!(*visits.borrow(), vec!["/login".to_owned()]);
}
