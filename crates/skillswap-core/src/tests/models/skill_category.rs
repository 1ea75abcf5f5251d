use crate::SkillCategory;

use std::str::FromStr;

#[test]
fn test_skill_category_as_str() {
    assert_eq!(SkillCategory::Technology.as_str(), "tech");
    assert_eq!(SkillCategory::Creative.as_str(), "creative");
    assert_eq!(SkillCategory::Language.as_str(), "language");
    assert_eq!(SkillCategory::Fitness.as_str(), "fitness");
    assert_eq!(SkillCategory::Music.as_str(), "music");
    assert_eq!(SkillCategory::Business.as_str(), "business");
}

#[test]
fn test_skill_category_from_str() {
    for category in SkillCategory::ALL {
        assert_eq!(SkillCategory::from_str(category.as_str()).unwrap(), category);
    }
    assert_eq!(
        SkillCategory::from_str("technology").unwrap(),
        SkillCategory::Technology
    );
    assert!(SkillCategory::from_str("cooking").is_err());
    assert!(SkillCategory::from_str("Tech").is_err());
}

#[test]
fn test_skill_category_serializes_to_stored_name() {
    let json = serde_json::to_string(&SkillCategory::Technology).unwrap();
    assert_eq!(json, "\"tech\"");

    let parsed: SkillCategory = serde_json::from_str("\"music\"").unwrap();
    assert_eq!(parsed, SkillCategory::Music);
}

#[test]
fn test_skill_category_label() {
    assert_eq!(SkillCategory::Technology.label(), "Technology");
    assert_eq!(SkillCategory::Language.label(), "Languages");
}
