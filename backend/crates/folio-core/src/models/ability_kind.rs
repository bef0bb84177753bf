use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Discriminates skill entries from language-proficiency entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityKind {
    Skill,
    Lang,
}

impl AbilityKind {
    /// Convert to database and route string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Skill => "skill",
            Self::Lang => "lang",
        }
    }

    /// Human-readable name used in status messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::Skill => "skill",
            Self::Lang => "language",
        }
    }

    /// Path of the admin list view for this kind
    pub fn list_path(&self) -> &'static str {
        match self {
            Self::Skill => "/resume/skills",
            Self::Lang => "/resume/languages",
        }
    }
}

impl FromStr for AbilityKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "skill" => Ok(Self::Skill),
            "lang" => Ok(Self::Lang),
            _ => Err(CoreError::InvalidAbilityKind {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for AbilityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
