use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Admin.as_str(), "Admin");
    assert_eq!(Role::Member.as_str(), "Member");
    assert_eq!(Role::Developer.as_str(), "Developer");
}

#[test]
fn test_role_from_str_is_case_insensitive() {
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("Admin").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("MEMBER").unwrap(), Role::Member);
    assert_eq!(Role::from_str(" developer ").unwrap(), Role::Developer);
    assert!(Role::from_str("superuser").is_err());
}

#[test]
fn test_role_serializes_canonical_casing() {
    let role: Role = serde_json::from_str(r#""member""#).unwrap();
    assert_eq!(serde_json::to_string(&role).unwrap(), r#""Member""#);
}

#[test]
fn test_role_capabilities() {
    assert!(Role::Admin.can_manage_members());
    assert!(!Role::Developer.can_manage_members());
    assert!(!Role::Member.can_manage_members());

    assert!(Role::Admin.can_manage_matches());
    assert!(Role::Developer.can_manage_matches());
    assert!(!Role::Member.can_manage_matches());
}
