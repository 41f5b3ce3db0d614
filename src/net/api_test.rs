use super::*;

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("abc123"), "Bearer abc123");
}

#[test]
fn success_range_is_2xx() {
    assert!(is_success(200));
    assert!(is_success(201));
    assert!(!is_success(199));
    assert!(!is_success(302));
    assert!(!is_success(401));
}

#[test]
fn decode_auth_success() {
    let resp: AuthResponse = decode_response(200, r#"{"token":"abc123","user":{"id":"u1"}}"#).unwrap();
    assert_eq!(resp.token, "abc123");
    assert_eq!(resp.user.str_field("id"), Some("u1"));
}

#[test]
fn decode_rejection_takes_body_message() {
    let err = decode_response::<AuthResponse>(400, r#"{"message":"Invalid credentials"}"#).unwrap_err();
    assert_eq!(err, ApiError::Status { status: 400, message: Some("Invalid credentials".to_owned()) });
    assert_eq!(err.user_message(), "Invalid credentials");
}

#[test]
fn decode_rejection_without_body_uses_fallback() {
    let err = decode_response::<AuthResponse>(500, "").unwrap_err();
    assert_eq!(err, ApiError::Status { status: 500, message: None });
    assert_eq!(err.user_message(), FALLBACK_MESSAGE);
}

#[test]
fn decode_rejection_with_non_json_body_uses_fallback() {
    let err = decode_response::<AuthResponse>(502, "<html>Bad Gateway</html>").unwrap_err();
    assert_eq!(err.user_message(), FALLBACK_MESSAGE);
}

#[test]
fn decode_success_with_garbage_is_decode_error() {
    let err = decode_response::<AuthResponse>(200, "not json").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
    assert_eq!(err.user_message(), FALLBACK_MESSAGE);
}

#[test]
fn decode_upload_result() {
    let resp: UploadResult = decode_response(200, r#"{"imageUrl":"https://cdn.test/p.png"}"#).unwrap();
    assert_eq!(resp.image_url, "https://cdn.test/p.png");
}

#[test]
fn empty_server_message_falls_back() {
    let err = ApiError::Status { status: 400, message: Some(String::new()) };
    assert_eq!(err.server_message(), None);
    assert_eq!(err.user_message(), FALLBACK_MESSAGE);
}

#[test]
fn network_error_uses_fallback() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.user_message(), FALLBACK_MESSAGE);
    assert!(!err.is_unauthorized());
}

#[test]
fn unauthorized_is_detected() {
    assert!(ApiError::Status { status: 401, message: None }.is_unauthorized());
    assert!(!ApiError::Status { status: 403, message: None }.is_unauthorized());
}

#[test]
fn http_api_keeps_config() {
    let api = HttpAuthApi::new(ApiConfig::with_base_url("https://api.test"));
    assert_eq!(api.config().base_url, "https://api.test");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_api_is_unavailable_off_browser() {
    let api = HttpAuthApi::new(ApiConfig::default());
    let err = futures::executor::block_on(api.login(&Credentials::new("a@b.co", "pw"))).unwrap_err();
    assert_eq!(err, ApiError::Network("not available on server".to_owned()));
}
