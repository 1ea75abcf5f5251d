use clap::Subcommand;

#[derive(Subcommand)]
pub enum SkillCommands {
    /// List the whole catalog
    List,
    /// Search names and descriptions (case-insensitive)
    Search {
        /// Text to look for; omit to browse a category
        #[arg(default_value = "")]
        query: String,
        /// Restrict to a category (tech, creative, language, fitness, music, business)
        #[arg(long)]
        category: Option<String>,
    },
}
