//! One-shot status messages carried across a redirect.
//!
//! A handler attaches a `Flash` to its redirect; the next rendered page shows
//! it and expires the cookie.

use crate::api::cookies::{FLASH_COOKIE, read_cookie};

use std::convert::Infallible;
use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

/// Bootstrap alert class the message is shown with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Info,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn new(level: FlashLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(FlashLevel::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(FlashLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(FlashLevel::Warning, message)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(FlashLevel::Danger, message)
    }

    /// Cookie-safe encoding (base64url of the JSON form)
    pub fn encode(&self) -> String {
        serde_json::to_vec(self)
            .map(|json| URL_SAFE_NO_PAD.encode(json))
            .unwrap_or_default()
    }

    /// Inverse of `encode`. Tampered or stale values yield `None`.
    pub fn decode(value: &str) -> Option<Self> {
        let json = URL_SAFE_NO_PAD.decode(value).ok()?;
        serde_json::from_slice(&json).ok()
    }
}

/// The flash sent with the current request, if any
#[derive(Debug, Clone, Default)]
pub struct IncomingFlash {
    pub flash: Option<Flash>,
    /// A flash cookie was present (even an unreadable one) and must be expired
    pub from_cookie: bool,
}

impl IncomingFlash {
    /// Show `flash` instead, still expiring any cookie that came in
    pub fn replace(self, flash: Flash) -> Self {
        Self {
            flash: Some(flash),
            from_cookie: self.from_cookie,
        }
    }
}

impl<S> FromRequestParts<S> for IncomingFlash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let incoming = match read_cookie(&parts.headers, FLASH_COOKIE) {
                Some(value) if !value.is_empty() => IncomingFlash {
                    flash: Flash::decode(value),
                    from_cookie: true,
                },
                _ => IncomingFlash::default(),
            };

            Ok(incoming)
        }
    }
}
