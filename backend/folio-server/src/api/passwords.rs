//! Argon2 work moved onto the blocking thread pool

use crate::{ApiError, ApiResult};

use folio_auth::{hash_password, verify_password};

/// Check a login or current-password attempt against the stored hash
pub async fn verify(password: String, stored_hash: String) -> ApiResult<bool> {
    tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
        .await
        .map_err(|e| ApiError::internal(format!("Password check did not finish: {}", e)))
}

/// Hash a new owner password
pub async fn hash(password: String) -> ApiResult<String> {
    let hashed = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| ApiError::internal(format!("Password hashing did not finish: {}", e)))?;

    Ok(hashed?)
}
