//! Domain types for the SkillSwap directory: users, the skills they teach or
//! want to learn, and the closed sets those skills are classified by.

pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::new_skill::NewSkill;
pub use models::new_user::NewUser;
pub use models::skill::Skill;
pub use models::skill_category::SkillCategory;
pub use models::skill_level::SkillLevel;
pub use models::skill_list::SkillList;
pub use models::user::User;
