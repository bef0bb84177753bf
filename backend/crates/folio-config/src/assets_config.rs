use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ASSETS_ROOT, DEFAULT_MAX_UPLOAD_BYTES,
    MAX_MAX_UPLOAD_BYTES,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Root of the image directories (`thumbnail/`, `bg/`, `logo/`).
    /// Relative paths resolve against the working directory.
    pub root: String,
    /// Largest accepted request body, uploads included
    pub max_upload_bytes: usize,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root: String::from(DEFAULT_ASSETS_ROOT),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl AssetsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.root.trim().is_empty() {
            return Err(ConfigError::assets("assets.root cannot be empty"));
        }

        if self.max_upload_bytes == 0 || self.max_upload_bytes > MAX_MAX_UPLOAD_BYTES {
            return Err(ConfigError::assets(format!(
                "assets.max_upload_bytes must be 1-{}, got {}",
                MAX_MAX_UPLOAD_BYTES, self.max_upload_bytes
            )));
        }

        Ok(())
    }
}
