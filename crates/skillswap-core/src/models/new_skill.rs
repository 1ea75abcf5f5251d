use crate::{SkillCategory, SkillLevel};

use serde::{Deserialize, Serialize};

/// Skill fields before an id has been assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSkill {
    pub name: String,
    pub category: SkillCategory,
    pub level: SkillLevel,
    #[serde(default)]
    pub description: String,
}
