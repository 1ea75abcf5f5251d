//! Skill entity - either a catalog entry or one embedded in a user profile.

use crate::{NewSkill, SkillCategory, SkillLevel};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Unique within its owning list only
    pub id: String,
    pub name: String,
    pub category: SkillCategory,
    pub level: SkillLevel,
    pub description: String,
}

impl Skill {
    pub fn from_new(id: impl Into<String>, new_skill: NewSkill) -> Self {
        Self {
            id: id.into(),
            name: new_skill.name,
            category: new_skill.category,
            level: new_skill.level,
            description: new_skill.description,
        }
    }

    /// Case-insensitive substring match against name or description.
    ///
    /// An empty query matches every skill.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}
