pub mod new_skill;
pub mod new_user;
pub mod skill;
pub mod skill_category;
pub mod skill_level;
pub mod skill_list;
pub mod user;
