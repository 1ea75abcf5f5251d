//! Entry names inside the key-value area.

pub const CURRENT_USER: &str = "skillswap_current_user";
pub const USERS: &str = "skillswap_users";
pub const SKILLS: &str = "skillswap_skills";
