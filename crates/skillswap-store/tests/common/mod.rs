#![allow(dead_code)]

use skillswap_core::{NewUser, Skill, SkillCategory, SkillLevel};
use skillswap_store::{DirectoryStore, MemoryStorage};

use std::thread;
use std::time::Duration;

/// A fresh in-memory store with the catalog seeded
pub fn seeded_store() -> DirectoryStore<MemoryStorage> {
    let mut store = DirectoryStore::new(MemoryStorage::new());
    store.initialize().unwrap();
    store
}

/// Creates a signup payload with an empty profile
pub fn create_test_new_user(name: &str, email: &str) -> NewUser {
    let mut new_user = NewUser::new(name, email);
    new_user.bio = Some(format!("{name}'s bio"));
    new_user
}

/// Creates an embedded profile skill
pub fn create_test_skill(id: &str, name: &str) -> Skill {
    Skill {
        id: id.to_string(),
        name: name.to_string(),
        category: SkillCategory::Language,
        level: SkillLevel::Beginner,
        description: format!("Learning {name}"),
    }
}

/// Ids are millisecond timestamps; step past the current millisecond.
pub fn next_millisecond() {
    thread::sleep(Duration::from_millis(2));
}
