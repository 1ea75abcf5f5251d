use crate::{CoreError, NewSkill, NewUser, SkillCategory, SkillLevel, SkillList, User};

use googletest::prelude::*;

fn new_skill(name: &str) -> NewSkill {
    NewSkill {
        name: name.to_string(),
        category: SkillCategory::Language,
        level: SkillLevel::Intermediate,
        description: String::new(),
    }
}

fn test_user() -> User {
    User::from_new("1700000000000", NewUser::new("Alice", "alice@example.com"))
}

#[test]
fn given_new_user_when_from_new_then_keeps_fields_and_id() {
    let mut new_user = NewUser::new("Alice", "alice@example.com");
    new_user.bio = Some("Polyglot".into());

    let user = User::from_new("42", new_user);

    assert_that!(user.id, eq("42"));
    assert_that!(user.name, eq("Alice"));
    assert_that!(user.email, eq("alice@example.com"));
    assert_that!(user.bio, some(eq("Polyglot")));
    assert_that!(user.avatar, none());
    assert_that!(user.teaching_skills, is_empty());
}

#[test]
fn given_skill_when_added_to_teaching_then_learning_untouched() {
    let mut user = test_user();

    let skill = user
        .add_skill(SkillList::Teaching, new_skill("French"), "100")
        .unwrap();

    assert_that!(skill.id, eq("100"));
    assert_that!(user.skills(SkillList::Teaching).len(), eq(1));
    assert_that!(user.skills(SkillList::Learning), is_empty());
}

#[test]
fn given_same_id_in_both_lists_when_added_then_both_accepted() {
    let mut user = test_user();

    user.add_skill(SkillList::Teaching, new_skill("French"), "100")
        .unwrap();
    user.add_skill(SkillList::Learning, new_skill("German"), "100")
        .unwrap();

    assert_that!(user.teaching_skills[0].id, eq("100"));
    assert_that!(user.learning_skills[0].id, eq("100"));
}

#[test]
fn given_blank_name_when_adding_skill_then_validation_error() {
    let mut user = test_user();

    let result = user.add_skill(SkillList::Teaching, new_skill("   "), "100");

    assert!(matches!(result, Err(CoreError::Validation { .. })));
    assert_that!(user.teaching_skills, is_empty());
}

#[test]
fn given_existing_skill_when_removed_then_returns_true() {
    let mut user = test_user();
    user.add_skill(SkillList::Learning, new_skill("German"), "7")
        .unwrap();
    user.add_skill(SkillList::Learning, new_skill("Italian"), "8")
        .unwrap();

    let removed = user.remove_skill(SkillList::Learning, "7");

    assert_that!(removed, eq(true));
    assert_that!(user.learning_skills.len(), eq(1));
    assert_that!(user.learning_skills[0].name, eq("Italian"));
}

#[test]
fn given_skill_in_other_list_when_removed_then_returns_false() {
    let mut user = test_user();
    user.add_skill(SkillList::Teaching, new_skill("French"), "7")
        .unwrap();

    let removed = user.remove_skill(SkillList::Learning, "7");

    assert_that!(removed, eq(false));
    assert_that!(user.teaching_skills.len(), eq(1));
}

#[test]
fn given_user_when_serialized_then_uses_camel_case_and_omits_absent_options() {
    let user = test_user();

    let json = serde_json::to_value(&user).unwrap();

    assert!(json.get("teachingSkills").is_some());
    assert!(json.get("learningSkills").is_some());
    assert!(json.get("avatar").is_none());
    assert!(json.get("bio").is_none());
}

#[test]
fn given_browser_shaped_json_when_deserialized_then_parses() {
    let json = r#"{
        "id": "1712345678901",
        "name": "Bob",
        "email": "bob@example.com",
        "teachingSkills": [
            {"id": "1", "name": "React Development", "category": "tech",
             "level": "intermediate", "description": "Build modern web apps with React"}
        ],
        "learningSkills": []
    }"#;

    let user: User = serde_json::from_str(json).unwrap();

    assert_that!(user.teaching_skills[0].category, eq(SkillCategory::Technology));
    assert_that!(user.bio, none());
}
