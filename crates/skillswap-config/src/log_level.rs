use std::ops::Deref;
use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;

/// `LevelFilter` that deserializes from any string.
///
/// Unknown names fall back to the default level instead of failing the load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub struct LogLevel(pub LevelFilter);

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel(crate::DEFAULT_LOG_LEVEL)
    }
}

impl From<String> for LogLevel {
    fn from(value: String) -> Self {
        LevelFilter::from_str(value.trim())
            .map(LogLevel)
            .unwrap_or_default()
    }
}

impl FromStr for LogLevel {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(LogLevel::from(s.to_string()))
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(log_level: LogLevel) -> Self {
        log_level.0
    }
}

impl Deref for LogLevel {
    type Target = LevelFilter;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
