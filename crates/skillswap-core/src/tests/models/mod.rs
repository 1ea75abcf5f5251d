mod skill;
mod skill_category;
mod skill_level;
mod user;
