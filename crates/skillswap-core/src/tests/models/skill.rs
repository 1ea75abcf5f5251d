use crate::{Skill, SkillCategory, SkillLevel};

use googletest::prelude::*;

fn guitar() -> Skill {
    Skill {
        id: "2".into(),
        name: "Guitar Playing".into(),
        category: SkillCategory::Music,
        level: SkillLevel::Beginner,
        description: "Learn to play acoustic guitar".into(),
    }
}

#[test]
fn given_empty_query_when_matching_then_matches() {
    assert_that!(guitar().matches_query(""), eq(true));
}

#[test]
fn given_query_with_different_case_when_matching_name_then_matches() {
    assert_that!(guitar().matches_query("gUITAR"), eq(true));
}

#[test]
fn given_query_only_in_description_when_matching_then_matches() {
    assert_that!(guitar().matches_query("ACOUSTIC"), eq(true));
}

#[test]
fn given_unrelated_query_when_matching_then_no_match() {
    assert_that!(guitar().matches_query("yoga"), eq(false));
}
