//! Admin panel error types
//!
//! User-correctable failures (`Validation`, `Conflict`, `InvalidFile`) are
//! normally turned into a flash message with `ApiError::recover`; whatever
//! escapes a handler becomes a plain-text error page, except `Unauthorized`
//! which sends the browser to the login view.

use crate::assets::error::AssetError;
use crate::{Flash, SeeOther};

use folio_auth::AuthError;
use folio_core::CoreError;
use folio_db::DbError;

use std::panic::Location;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use thiserror::Error;

pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource or route segment not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Required form field missing or the body could not be read (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// A submitted value was present but unusable (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Uniqueness violated; the write was rolled back (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Upload rejected by the image store (400)
    #[error("Invalid file: {message} {location}")]
    InvalidFile {
        message: String,
        location: ErrorLocation,
    },

    /// No owner session; answered with a redirect to the login view
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict<S: Into<String>>(message: S) -> Self {
        ApiError::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        ApiError::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        ApiError::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Turn a user-correctable failure into a redirect to `path` carrying a
    /// flash message. Any other error is returned unchanged.
    pub fn recover(self, path: &str) -> Result<SeeOther> {
        match self {
            ApiError::Validation { ref message, .. } | ApiError::InvalidFile { ref message, .. } => {
                log::warn!("{}", self);
                Ok(SeeOther::to(path).with_flash(Flash::warning(message.clone())))
            }
            ApiError::Conflict { ref message, .. } => {
                log::warn!("{}", self);
                Ok(SeeOther::to(path).with_flash(Flash::danger(message.clone())))
            }
            other => Err(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Unauthorized { .. } => {
                log::info!("{}", self);
                return SeeOther::to(LOGIN_PATH)
                    .with_flash(Flash::warning("Please log in to access this page"))
                    .into_response();
            }
            ApiError::Internal { .. } => {
                log::error!("{}", self);
                // Don't leak internals to the browser
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    String::from("Internal server error"),
                )
            }
            ApiError::NotFound { ref message, .. } => {
                log::warn!("{}", self);
                (StatusCode::NOT_FOUND, message.clone())
            }
            ApiError::Conflict { ref message, .. } => {
                log::warn!("{}", self);
                (StatusCode::CONFLICT, message.clone())
            }
            ApiError::BadRequest { ref message, .. }
            | ApiError::Validation { ref message, .. }
            | ApiError::InvalidFile { ref message, .. } => {
                log::warn!("{}", self);
                (StatusCode::BAD_REQUEST, message.clone())
            }
        };

        (status, message).into_response()
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::UniqueViolation { .. } => ApiError::Conflict {
                message: "Record already exists".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            other => {
                log::error!("Database error: {}", other);
                ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

/// Convert domain validation errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::InvalidAbilityKind { .. }
            | CoreError::InvalidExperienceKind { .. }
            | CoreError::InvalidImageSlot { .. } => ApiError::NotFound {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::WeakPassword { message, .. } => ApiError::Validation {
                message,
                field: Some("new_password".to_string()),
                location: ErrorLocation::from(Location::caller()),
            },
            other => {
                log::error!("Auth error: {}", other);
                ApiError::Internal {
                    message: "Authentication failure".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

impl From<AssetError> for ApiError {
    #[track_caller]
    fn from(e: AssetError) -> Self {
        match e {
            AssetError::InvalidFile { message, .. } => ApiError::InvalidFile {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            AssetError::SentinelImage { slot, .. } => ApiError::Validation {
                message: format!("You can't remove the default {} image", slot),
                field: None,
                location: ErrorLocation::from(Location::caller()),
            },
            AssetError::Io { .. } => {
                log::error!("Asset error: {}", e);
                ApiError::Internal {
                    message: "Image storage failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

impl From<minijinja::Error> for ApiError {
    #[track_caller]
    fn from(e: minijinja::Error) -> Self {
        log::error!("Template error: {:#}", e);
        ApiError::Internal {
            message: "Failed to render page".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
