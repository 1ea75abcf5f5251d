use clap::Subcommand;

#[derive(Subcommand)]
pub enum UserCommands {
    /// Sign up a new user
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        avatar: Option<String>,
        #[arg(long)]
        bio: Option<String>,
    },
    /// Look up a user by exact email
    Get {
        #[arg(long)]
        email: String,
    },
    /// List every user
    List,
}
