use error_location::ErrorLocation;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    /// The upload is not an acceptable image
    #[error("Invalid file: {message} {location}")]
    InvalidFile {
        message: String,
        location: ErrorLocation,
    },

    /// Default images are shared placeholders and never removed
    #[error("Refusing to delete the default {slot} image {location}")]
    SentinelImage {
        slot: &'static str,
        location: ErrorLocation,
    },

    #[error("IO error on {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, AssetError>;
