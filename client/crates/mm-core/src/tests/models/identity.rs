use crate::{CoreError, Gender, Identity, Role, UserId};

use serde_json::json;

#[test]
fn given_login_payload_with_password_when_from_login_data_then_password_is_dropped() {
    let data = json!({
        "id": 1,
        "username": "alice",
        "password": "hunter2",
        "role": "Member",
        "gender": "Female",
        "fullname": "Alice A",
        "age": 29
    });

    let identity = Identity::from_login_data(data).unwrap();

    assert_eq!(identity.id, UserId::Number(1));
    assert_eq!(identity.role, Role::Member);
    assert_eq!(identity.gender, Some(Gender::Female));
    assert!(!identity.extra.contains_key("password"));
    assert_eq!(identity.extra.get("age"), Some(&json!(29)));

    let persisted = serde_json::to_string(&identity).unwrap();
    assert!(!persisted.contains("hunter2"));
}

#[test]
fn given_null_payload_when_from_login_data_then_validation_error() {
    let result = Identity::from_login_data(serde_json::Value::Null);
    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_empty_object_when_from_login_data_then_validation_error() {
    let result = Identity::from_login_data(json!({ "password": "x" }));
    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_blank_username_when_from_login_data_then_validation_error() {
    let result = Identity::from_login_data(json!({ "id": 1, "username": " ", "role": "Admin" }));
    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_unknown_role_when_from_login_data_then_malformed() {
    let result = Identity::from_login_data(json!({ "id": 1, "username": "a", "role": "Guest" }));
    assert!(matches!(result, Err(CoreError::MalformedIdentity { .. })));
}

#[test]
fn given_lowercase_role_when_from_login_data_then_normalized() {
    let identity =
        Identity::from_login_data(json!({ "id": "u1", "username": "a", "role": "admin" })).unwrap();
    assert_eq!(identity.role, Role::Admin);
}

#[test]
fn given_identity_when_serialize_roundtrip_then_equal() {
    let mut original = Identity::new(5, "bob", Role::Developer).with_gender(Gender::Male);
    original.extra.insert("image".into(), json!("https://placehold.co/300/png"));

    let json = serde_json::to_string(&original).unwrap();
    let restored: Identity = serde_json::from_str(&json).unwrap();

    assert_eq!(original, restored);
}

#[test]
fn given_secret_in_extra_when_strip_secrets_then_removed() {
    let mut identity = Identity::new(5, "bob", Role::Member);
    identity.extra.insert("password".into(), json!("pw"));

    assert!(identity.strip_secrets());
    assert!(!identity.strip_secrets());
    assert!(identity.extra.is_empty());
}

#[test]
fn test_display_name_prefers_fullname() {
    let mut identity = Identity::new(1, "bob", Role::Member);
    assert_eq!(identity.display_name(), "bob");
    identity.fullname = Some("Bob Builder".into());
    assert_eq!(identity.display_name(), "Bob Builder");
}
