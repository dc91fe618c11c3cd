use crate::{Candidate, Gender, Role, UserId};

#[test]
fn given_api_user_list_when_deserialize_then_tolerates_loose_fields() {
    let json = r#"[
        {"id": 1, "username": "a", "gender": "male", "role": "admin", "age": "31"},
        {"id": 2, "username": "b", "gender": "", "role": "Boss", "age": ""},
        {"id": "x3", "username": "c", "gender": "Female", "age": 27, "location": "Jakarta"}
    ]"#;

    let candidates: Vec<Candidate> = serde_json::from_str(json).unwrap();

    assert_eq!(candidates[0].gender, Some(Gender::Male));
    assert_eq!(candidates[0].role, Some(Role::Admin));
    assert_eq!(candidates[0].age, Some(31));
    assert!(candidates[0].is_admin());

    assert_eq!(candidates[1].gender, None);
    assert_eq!(candidates[1].role, None);
    assert_eq!(candidates[1].age, None);

    assert_eq!(candidates[2].id, UserId::Text("x3".into()));
    assert_eq!(candidates[2].age, Some(27));
    assert_eq!(candidates[2].location.as_deref(), Some("Jakarta"));
}

#[test]
fn test_candidate_display_name() {
    let mut candidate = Candidate::new(1, "jdoe");
    assert_eq!(candidate.display_name(), "jdoe");
    candidate.fullname = Some("Jane Doe".into());
    assert_eq!(candidate.display_name(), "Jane Doe");
}
