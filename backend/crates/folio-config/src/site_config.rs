use crate::{ConfigError, ConfigErrorResult, DEFAULT_PUBLIC_URL};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Where logout sends the visitor (the public portfolio)
    pub public_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            public_url: String::from(DEFAULT_PUBLIC_URL),
        }
    }
}

impl SiteConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.public_url.trim().is_empty() {
            return Err(ConfigError::config("site.public_url cannot be empty"));
        }

        Ok(())
    }
}
