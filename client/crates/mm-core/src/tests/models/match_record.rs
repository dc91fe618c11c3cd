use crate::{MatchParty, MatchRecord, UserId};

#[test]
fn given_embedded_profiles_when_deserialize_then_profiles() {
    let json = r#"{
        "userA": {"id": 1, "username": "a", "fullname": "Ann"},
        "userB": {"id": 2, "username": "b"}
    }"#;

    let record: MatchRecord = serde_json::from_str(json).unwrap();

    assert!(matches!(record.user_a, MatchParty::Profile(_)));
    assert_eq!(record.user_a.label(), "Ann");
    assert_eq!(record.user_b.id(), &UserId::Number(2));
}

#[test]
fn given_bare_ids_when_deserialize_then_ids() {
    let json = r#"{"user_a": 1, "user_b": "k2"}"#;

    let record: MatchRecord = serde_json::from_str(json).unwrap();

    assert_eq!(record.user_a, MatchParty::Id(UserId::Number(1)));
    assert_eq!(record.user_b.label(), "#k2");
    assert!(record.involves(&UserId::Text("k2".into())));
    assert!(!record.involves(&UserId::Number(3)));
}

#[test]
fn given_mixed_id_forms_when_involves_then_matched_by_value() {
    let json = r#"{"user_a": "4", "user_b": 9}"#;

    let record: MatchRecord = serde_json::from_str(json).unwrap();

    assert!(record.involves(&UserId::Number(4)));
    assert!(record.involves(&UserId::Text("9".into())));
    assert!(!record.involves(&UserId::Text("49".into())));
}
