use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::Serialize;

/// Placeholder stored in `Profile::thumbnail` when no custom image is set
pub const THUMBNAIL_SENTINEL: &str = "thumbnail-img.jpg";

/// Placeholder stored in `Profile::bg` when no custom image is set
pub const BACKGROUND_SENTINEL: &str = "background-img.jpg";

/// Asset category an uploaded image belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSlot {
    Thumbnail,
    Background,
    Logo,
}

impl ImageSlot {
    /// Directory name (relative to the asset root) holding this slot's files
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Thumbnail => "thumbnail",
            Self::Background => "bg",
            Self::Logo => "logo",
        }
    }

    /// Default filename meaning "no custom image", if the slot has one
    pub fn sentinel(&self) -> Option<&'static str> {
        match self {
            Self::Thumbnail => Some(THUMBNAIL_SENTINEL),
            Self::Background => Some(BACKGROUND_SENTINEL),
            Self::Logo => None,
        }
    }

    pub fn is_sentinel(&self, filename: &str) -> bool {
        self.sentinel() == Some(filename)
    }

    /// Human-readable name used in status messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::Thumbnail => "thumbnail",
            Self::Background => "background",
            Self::Logo => "logo",
        }
    }
}

/// Parses the `{slot}` segment of `/profile/delete/img/{slot}`.
///
/// Only profile slots are addressable by route; contact logos are removed
/// together with their contact.
impl FromStr for ImageSlot {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "thumbnail" => Ok(Self::Thumbnail),
            "bg" => Ok(Self::Background),
            _ => Err(CoreError::InvalidImageSlot {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
