mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

const CONFIG_DIR_ENV: &str = "SKILLSWAP_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".skillswap";
const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_STORAGE_DIR: &str = "data";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
