use crate::Gender;

use std::str::FromStr;

#[test]
fn test_gender_complement_is_symmetric() {
    assert_eq!(Gender::Male.complement(), Gender::Female);
    assert_eq!(Gender::Female.complement(), Gender::Male);
    assert_eq!(Gender::Male.complement().complement(), Gender::Male);
}

#[test]
fn test_gender_from_str() {
    assert_eq!(Gender::from_str("male").unwrap(), Gender::Male);
    assert_eq!(Gender::from_str("Female").unwrap(), Gender::Female);
    assert!(Gender::from_str("").is_err());
    assert!(Gender::from_str("other").is_err());
}
