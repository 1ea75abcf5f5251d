use crate::Skill;

use serde::{Deserialize, Serialize};

/// User fields before an id has been assigned (signup payload).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default)]
    pub teaching_skills: Vec<Skill>,
    #[serde(default)]
    pub learning_skills: Vec<Skill>,
}

impl NewUser {
    /// A signup with empty profile lists
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            avatar: None,
            bio: None,
            teaching_skills: Vec::new(),
            learning_skills: Vec::new(),
        }
    }
}
