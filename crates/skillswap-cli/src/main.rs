//! skillswap - SkillSwap directory CLI
//!
//! # Examples
//!
//! ```bash
//! # Browse a category
//! skillswap skill search --category music --pretty
//!
//! # Sign up and sign in
//! skillswap user create --name Alice --email alice@example.com
//! skillswap session login --email alice@example.com
//!
//! # Offer to teach something
//! skillswap profile add-skill --list teaching --name French \
//!     --category language --level advanced
//! ```

use skillswap_cli::{Cli, CliResult, execute, logger};
use skillswap_config::Config;
use skillswap_store::{DirectoryStore, FileStorage};

use std::process::ExitCode;

use clap::Parser;
use log::debug;
use serde_json::Value;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<String> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => config.storage_path()?,
    };

    let storage = FileStorage::new(data_dir);
    debug!("Using storage directory {:?}", storage.dir());

    let mut store = DirectoryStore::new(storage);
    let value: Value = execute(&mut store, cli.command)?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(json)
}
