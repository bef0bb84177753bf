use error_location::ErrorLocation;
use folio_auth::AuthError;
use folio_config::ConfigError;
use folio_core::CoreError;
use folio_db::DbError;
use std::panic::Location;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid profile: {0}")]
    Profile(#[from] CoreError),

    #[error("Password rejected: {0}")]
    Password(#[from] AuthError),

    #[error("Database error: {0}")]
    Db(#[from] DbError),

    #[error("A profile already exists; use `folio set-password` to change its password {location}")]
    AlreadyProvisioned { location: ErrorLocation },

    #[error("No profile exists yet; run `folio init-profile` first {location}")]
    NotProvisioned { location: ErrorLocation },
}

impl CliError {
    #[track_caller]
    pub fn already_provisioned() -> Self {
        CliError::AlreadyProvisioned {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_provisioned() -> Self {
        CliError::NotProvisioned {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
