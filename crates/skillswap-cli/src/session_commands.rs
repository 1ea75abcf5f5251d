use clap::Subcommand;

#[derive(Subcommand)]
pub enum SessionCommands {
    /// Show the signed-in user
    Show,
    /// Sign in as the first user with this email
    Login {
        #[arg(long)]
        email: String,
    },
    /// Sign out
    Logout,
}
