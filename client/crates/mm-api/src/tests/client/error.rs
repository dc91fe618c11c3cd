use crate::{ApiError, GENERIC_FAILURE_MESSAGE};

use mm_core::Identity;

#[test]
fn test_user_message_prefers_server_message() {
    let err = ApiError::api_error(401, Some("Invalid credentials".into()));
    assert_eq!(err.user_message(), "Invalid credentials");
}

#[test]
fn test_user_message_falls_back_without_server_message() {
    let err = ApiError::api_error(500, None);
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);

    let blank = ApiError::api_error(500, Some("  ".into()));
    assert_eq!(blank.user_message(), GENERIC_FAILURE_MESSAGE);
}

#[test]
fn test_user_message_for_validation() {
    let err = ApiError::validation("Please enter username and password");
    assert_eq!(err.user_message(), "Please enter username and password");
}

#[test]
fn test_user_message_hides_payload_details() {
    let core = Identity::from_login_data(serde_json::Value::Null).unwrap_err();
    let err = ApiError::from(core);
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    assert!(!err.is_network());
}

#[test]
fn test_json_error_display_includes_context() {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = ApiError::from(source);
    assert!(err.to_string().starts_with("JSON parse error"));
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
}
