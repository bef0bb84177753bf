//! Authorization check for protected routes

use crate::api::extractors::current_profile::CurrentProfile;
use crate::api::extractors::session::Session;
use crate::{ApiError, AppState};

use folio_core::Profile;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

const SEC_FETCH_SITE: &str = "sec-fetch-site";

/// The authenticated owner and their profile.
///
/// Rejects with `ApiError::Unauthorized` (a redirect to the login view)
/// unless the session names the singleton profile, so the handler never runs.
/// Requests marked `Sec-Fetch-Site: cross-site` are rejected as well.
pub struct Owner(pub Profile);

fn is_cross_site(parts: &Parts) -> bool {
    parts
        .headers
        .get(SEC_FETCH_SITE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|site| site.eq_ignore_ascii_case("cross-site"))
}

impl FromRequestParts<AppState> for Owner {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            if is_cross_site(parts) {
                return Err(ApiError::unauthorized(format!(
                    "cross-site request to {}",
                    parts.uri.path()
                )));
            }

            let session = Session::resolve(parts, state);
            if session.0.is_none() {
                return Err(ApiError::unauthorized(format!(
                    "no session for {}",
                    parts.uri.path()
                )));
            }

            let CurrentProfile(profile) = CurrentProfile::load(state).await?;
            if !session.is_owner(&profile) {
                return Err(ApiError::unauthorized(format!(
                    "session does not name the owner for {}",
                    parts.uri.path()
                )));
            }

            Ok(Owner(profile))
        }
    }
}
