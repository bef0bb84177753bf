use crate::ApiError;

use std::fmt::Display;
use std::future::Future;
use std::str::FromStr;

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// The single `{param}` of a route, parsed into `T`.
///
/// Anything that does not parse (unknown kind, non-numeric id) is
/// `ApiError::NotFound`. Being a parts extractor it runs before any body
/// extractor, so no form is read for a bad segment.
pub struct Segment<T>(pub T);

impl<T, S> FromRequestParts<S> for Segment<T>
where
    T: FromStr + Send,
    T::Err: Display,
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Path(raw) = Path::<String>::from_request_parts(parts, state)
                .await
                .map_err(|e| ApiError::not_found(e.body_text()))?;

            raw.parse::<T>()
                .map(Segment)
                .map_err(|e| ApiError::not_found(format!("'{}': {}", raw, e)))
        }
    }
}
