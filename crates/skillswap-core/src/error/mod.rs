use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid skill category: {value} {location}")]
    InvalidSkillCategory {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid skill level: {value} {location}")]
    InvalidSkillLevel {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid skill list: {value} {location}")]
    InvalidSkillList {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Creates a Validation error at caller location.
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
