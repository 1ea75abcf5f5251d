use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Change profile fields
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        bio: Option<String>,
        #[arg(long)]
        avatar: Option<String>,
    },
    /// Add a skill to the teaching or learning list
    AddSkill {
        /// teaching | learning
        #[arg(long)]
        list: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: String,
        /// beginner | intermediate | advanced
        #[arg(long)]
        level: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Remove a skill from the teaching or learning list
    RemoveSkill {
        /// teaching | learning
        #[arg(long)]
        list: String,
        /// Skill ID
        #[arg(long)]
        id: String,
    },
}
