//! Identity resolution

use crate::{ApiError, ApiResult, AppState};

use folio_core::Profile;
use folio_db::ProfileRepository;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// The singleton site owner record
pub struct CurrentProfile(pub Profile);

impl CurrentProfile {
    pub async fn load(state: &AppState) -> ApiResult<Self> {
        let profile = ProfileRepository::new(state.pool.clone())
            .find()
            .await?
            // Provisioning bug, not a runtime expectation
            .ok_or_else(|| ApiError::not_found("No profile has been provisioned"))?;

        Ok(CurrentProfile(profile))
    }
}

impl FromRequestParts<AppState> for CurrentProfile {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move { CurrentProfile::load(state).await }
    }
}
