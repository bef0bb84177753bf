use crate::{ImageStore, Templates};

use folio_auth::SessionTokens;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub sessions: Arc<SessionTokens>,
    pub templates: Arc<Templates>,
    pub images: Arc<ImageStore>,
    pub settings: Arc<SiteSettings>,
}

/// Request-independent settings the handlers need
#[derive(Debug, Clone)]
pub struct SiteSettings {
    /// Where logout sends the visitor
    pub public_url: String,
    /// Mark the session cookie `Secure`
    pub secure_cookie: bool,
    /// Largest accepted request body
    pub max_upload_bytes: usize,
}

impl From<&folio_config::Config> for SiteSettings {
    fn from(config: &folio_config::Config) -> Self {
        Self {
            public_url: config.site.public_url.clone(),
            secure_cookie: config.auth.secure_cookie,
            max_upload_bytes: config.assets.max_upload_bytes,
        }
    }
}
