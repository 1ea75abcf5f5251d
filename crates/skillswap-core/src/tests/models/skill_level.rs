use crate::{CoreError, SkillLevel};

use std::str::FromStr;

#[test]
fn test_skill_level_from_str() {
    assert_eq!(
        SkillLevel::from_str("beginner").unwrap(),
        SkillLevel::Beginner
    );
    assert_eq!(
        SkillLevel::from_str("intermediate").unwrap(),
        SkillLevel::Intermediate
    );
    assert_eq!(
        SkillLevel::from_str("advanced").unwrap(),
        SkillLevel::Advanced
    );
}

#[test]
fn given_unknown_level_when_parsed_then_invalid_skill_level_error() {
    match SkillLevel::from_str("expert") {
        Err(CoreError::InvalidSkillLevel { value, .. }) => assert_eq!(value, "expert"),
        other => panic!("Expected InvalidSkillLevel, got {other:?}"),
    }
}
