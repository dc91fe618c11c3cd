use crate::UserId;

use std::str::FromStr;

#[test]
fn test_user_id_keeps_json_form() {
    let numeric: UserId = serde_json::from_str("7").unwrap();
    let text: UserId = serde_json::from_str(r#""65a1f0""#).unwrap();

    assert_eq!(numeric, UserId::Number(7));
    assert_eq!(text, UserId::Text("65a1f0".into()));
    assert_eq!(serde_json::to_string(&numeric).unwrap(), "7");
    assert_eq!(serde_json::to_string(&text).unwrap(), r#""65a1f0""#);
}

#[test]
fn test_user_id_from_str_prefers_numbers() {
    assert_eq!(UserId::from_str("42").unwrap(), UserId::Number(42));
    assert_eq!(
        UserId::from_str("abc-1").unwrap(),
        UserId::Text("abc-1".into())
    );
}

#[test]
fn test_user_id_display() {
    assert_eq!(UserId::Number(3).to_string(), "3");
    assert_eq!(UserId::from("x9").to_string(), "x9");
}

#[test]
fn test_blank_text_id_is_blank() {
    assert!(UserId::from("  ").is_blank());
    assert!(!UserId::Number(0).is_blank());
}

#[test]
fn given_numeric_text_id_when_compare_with_number_then_equal() {
    let parsed = UserId::from_str("2").unwrap();

    assert_eq!(parsed, UserId::Text("2".into()));
    assert_eq!(UserId::Text("2".into()), UserId::Number(2));
    assert_ne!(UserId::Text("02".into()), UserId::Number(2));
}

#[test]
fn given_equal_ids_of_different_form_when_hashed_then_same_set_entry() {
    use std::collections::HashSet;

    let ids: HashSet<UserId> = [UserId::Number(5), UserId::Text("5".into())]
        .into_iter()
        .collect();

    assert_eq!(ids.len(), 1);
}
