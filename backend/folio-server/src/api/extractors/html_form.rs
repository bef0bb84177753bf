use crate::{ApiError, ApiResult};

use std::future::Future;

use axum::extract::{Form, FromRequest, Request};
use serde::de::DeserializeOwned;

/// `application/x-www-form-urlencoded` body.
///
/// Form structs keep every field optional; presence is checked with
/// `required` so a missing field is a `BadRequest` naming the field.
pub struct HtmlForm<T>(pub T);

impl<T, S> FromRequest<S> for HtmlForm<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| ApiError::bad_request(e.body_text()))?;

            Ok(HtmlForm(value))
        }
    }
}

/// A present, non-blank form value
#[track_caller]
pub fn required(value: Option<String>, field: &str) -> ApiResult<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ApiError::bad_request(format!(
            "Missing required field '{}'",
            field
        ))),
    }
}
