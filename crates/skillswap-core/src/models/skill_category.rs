use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Closed set of categories a skill can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    #[serde(rename = "tech")]
    Technology,
    #[serde(rename = "creative")]
    Creative,
    #[serde(rename = "language")]
    Language,
    #[serde(rename = "fitness")]
    Fitness,
    #[serde(rename = "music")]
    Music,
    #[serde(rename = "business")]
    Business,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 6] = [
        Self::Technology,
        Self::Creative,
        Self::Language,
        Self::Fitness,
        Self::Music,
        Self::Business,
    ];

    /// Stored string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Technology => "tech",
            Self::Creative => "creative",
            Self::Language => "language",
            Self::Fitness => "fitness",
            Self::Music => "music",
            Self::Business => "business",
        }
    }

    /// Human-readable label used when browsing by category
    pub fn label(&self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Creative => "Creative",
            Self::Language => "Languages",
            Self::Fitness => "Fitness",
            Self::Music => "Music",
            Self::Business => "Business",
        }
    }
}

impl FromStr for SkillCategory {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "tech" | "technology" => Ok(Self::Technology),
            "creative" => Ok(Self::Creative),
            "language" => Ok(Self::Language),
            "fitness" => Ok(Self::Fitness),
            "music" => Ok(Self::Music),
            "business" => Ok(Self::Business),
            _ => Err(CoreError::InvalidSkillCategory {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
