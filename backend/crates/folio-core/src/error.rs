use crate::ErrorLocation;

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid ability kind: {value} {location}")]
    InvalidAbilityKind {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid experience kind: {value} {location}")]
    InvalidExperienceKind {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid image slot: {value} {location}")]
    InvalidImageSlot {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error for a single form field
    #[track_caller]
    pub fn validation<S: Into<String>>(field: &str, message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
