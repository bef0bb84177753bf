//! Per-request session context

use crate::AppState;
use crate::api::cookies::{SESSION_COOKIE, read_cookie};

use folio_auth::Principal;
use folio_core::Profile;

use std::convert::Infallible;
use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Principal named by a valid session cookie, if any.
///
/// Missing, expired or forged tokens all resolve to `None`.
#[derive(Debug, Clone)]
pub struct Session(pub Option<Principal>);

impl Session {
    pub fn resolve(parts: &Parts, state: &AppState) -> Self {
        let principal = read_cookie(&parts.headers, SESSION_COOKIE)
            .filter(|token| !token.is_empty())
            .and_then(|token| match state.sessions.principal(token) {
                Ok(principal) => Some(principal),
                Err(e) => {
                    log::debug!("Ignoring session cookie: {}", e);
                    None
                }
            });

        Session(principal)
    }

    /// Whether the session belongs to the owner of `profile` and was issued
    /// against their current password
    pub fn is_owner(&self, profile: &Profile) -> bool {
        self.0.as_ref().is_some_and(|principal| {
            principal.is(profile.id) && principal.matches_password(&profile.password_hash)
        })
    }
}

impl FromRequestParts<AppState> for Session {
    type Rejection = Infallible;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move { Ok(Session::resolve(parts, state)) }
    }
}
