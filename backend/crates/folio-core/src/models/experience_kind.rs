use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Discriminates career history from education history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceKind {
    Career,
    Education,
}

impl ExperienceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Career => "career",
            Self::Education => "education",
        }
    }

    pub fn list_path(&self) -> &'static str {
        match self {
            Self::Career => "/resume/careers",
            Self::Education => "/resume/educations",
        }
    }
}

impl FromStr for ExperienceKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "career" => Ok(Self::Career),
            "education" => Ok(Self::Education),
            _ => Err(CoreError::InvalidExperienceKind {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ExperienceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
