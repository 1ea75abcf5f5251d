//! skillswap-cli library
//!
//! Command definitions and their execution against a `DirectoryStore`,
//! exported so the binary and the tests share one code path.

pub mod cli;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod logger;
pub mod profile_commands;
pub mod session_commands;
pub mod skill_commands;
pub mod user_commands;


pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use handlers::execute;
