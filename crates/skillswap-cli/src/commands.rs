use crate::{
    profile_commands::ProfileCommands, session_commands::SessionCommands,
    skill_commands::SkillCommands, user_commands::UserCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Browse and search the skill catalog
    Skill {
        #[command(subcommand)]
        action: SkillCommands,
    },

    /// Directory members
    User {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Current signed-in user
    Session {
        #[command(subcommand)]
        action: SessionCommands,
    },

    /// Edit the signed-in user's profile
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
}
