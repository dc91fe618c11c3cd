use crate::ApiClient;
use crate::client::client::error_message;

use mm_core::UserId;

use std::time::Duration;

fn client(base_url: &str) -> ApiClient {
    ApiClient::new(base_url, Duration::from_secs(5)).unwrap()
}

#[test]
fn test_base_url_trailing_slash_trimmed() {
    assert_eq!(client("http://localhost:8000/").base_url, "http://localhost:8000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    assert_eq!(client("http://localhost:8000").base_url, "http://localhost:8000");
}

#[test]
fn test_new_client_has_no_user() {
    assert!(client("http://localhost:8000").user_id.is_none());
}

#[test]
fn test_for_user_keeps_base_url_and_sets_user() {
    let anonymous = client("http://localhost:8000/");
    let acting = anonymous.for_user(&UserId::from(7));

    assert_eq!(acting.base_url, "http://localhost:8000");
    assert_eq!(acting.user_id, Some(UserId::Number(7)));
    assert!(anonymous.user_id.is_none());
}

#[test]
fn test_error_message_top_level() {
    assert_eq!(
        error_message(r#"{"message": "Invalid credentials"}"#),
        Some("Invalid credentials".to_string())
    );
}

#[test]
fn test_error_message_nested() {
    assert_eq!(
        error_message(r#"{"error": {"code": "NOT_FOUND", "message": "User not found"}}"#),
        Some("User not found".to_string())
    );
}

#[test]
fn test_error_message_plain_error_string() {
    assert_eq!(
        error_message(r#"{"error": "Username taken"}"#),
        Some("Username taken".to_string())
    );
}

#[test]
fn test_error_message_absent_or_blank() {
    assert_eq!(error_message("<html>Bad Gateway</html>"), None);
    assert_eq!(error_message(r#"{"message": "   "}"#), None);
    assert_eq!(error_message(r#"{"status": "fail"}"#), None);
}
