use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SESSION_TTL_SECS, MIN_SESSION_SECRET_LENGTH,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 secret for session tokens. Generated at startup when unset.
    pub session_secret: Option<String>,
    pub session_ttl_secs: u64,
    /// Mark the session cookie `Secure` (serve over HTTPS only)
    pub secure_cookie: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_secret: None,
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
            secure_cookie: false,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(ref secret) = self.session_secret
            && secret.len() < MIN_SESSION_SECRET_LENGTH
        {
            return Err(ConfigError::auth(format!(
                "auth.session_secret must be at least {} bytes, got {}",
                MIN_SESSION_SECRET_LENGTH,
                secret.len()
            )));
        }

        if self.session_ttl_secs == 0 {
            return Err(ConfigError::auth("auth.session_ttl_secs must be > 0"));
        }

        Ok(())
    }
}
