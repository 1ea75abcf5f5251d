//! User entity - a directory member with embedded teaching/learning skills.

use crate::{CoreError, NewSkill, NewUser, Result as CoreErrorResult, Skill, SkillList};

use serde::{Deserialize, Serialize};

/// A directory member.
///
/// Profile edits replace the whole record; the caller is responsible for
/// writing the result back to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    /// Lookup key, not enforced unique
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

impl User {
    pub fn from_new(id: impl Into<String>, new_user: NewUser) -> Self {
        Self {
            id: id.into(),
            name: new_user.name,
            email: new_user.email,
            avatar: new_user.avatar,
            bio: new_user.bio,
            teaching_skills: new_user.teaching_skills,
            learning_skills: new_user.learning_skills,
        }
    }

    pub fn skills(&self, list: SkillList) -> &[Skill] {
        match list {
            SkillList::Teaching => &self.teaching_skills,
            SkillList::Learning => &self.learning_skills,
        }
    }

    fn skills_mut(&mut self, list: SkillList) -> &mut Vec<Skill> {
        match list {
            SkillList::Teaching => &mut self.teaching_skills,
            SkillList::Learning => &mut self.learning_skills,
        }
    }

    /// Append a skill to the chosen list.
    ///
    /// The id is only required to be unique within that list; no check is
    /// made against the other list or other users.
    #[track_caller]
    pub fn add_skill(
        &mut self,
        list: SkillList,
        new_skill: NewSkill,
        id: impl Into<String>,
    ) -> CoreErrorResult<Skill> {
        if new_skill.name.trim().is_empty() {
            return Err(CoreError::validation("skill name must not be empty"));
        }

        let skill = Skill::from_new(id, new_skill);
        self.skills_mut(list).push(skill.clone());
        Ok(skill)
    }

    /// Remove every skill with `skill_id` from the chosen list.
    ///
    /// Returns true if anything was removed.
    pub fn remove_skill(&mut self, list: SkillList, skill_id: &str) -> bool {
        let skills = self.skills_mut(list);
        let before = skills.len();
        skills.retain(|s| s.id != skill_id);
        skills.len() != before
    }
}
