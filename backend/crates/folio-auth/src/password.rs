//! Password hashing for the owner account.
//!
//! Hashes are argon2id PHC strings, so the salt and parameters travel with
//! the hash.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use error_location::ErrorLocation;
use sha2::{Digest, Sha256};

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Hex characters kept from the password fingerprint
const FINGERPRINT_LENGTH: usize = 16;

/// Reject passwords that do not satisfy the password policy
#[track_caller]
pub fn validate_new_password(password: &str) -> AuthErrorResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword {
            message: format!(
                "Password must be at least {} characters long",
                MIN_PASSWORD_LENGTH
            ),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if password.trim().is_empty() {
        return Err(AuthError::WeakPassword {
            message: "Password cannot be blank".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}

/// Hash a new password with a fresh random salt
#[track_caller]
pub fn hash_password(password: &str) -> AuthErrorResult<String> {
    validate_new_password(password)?;

    let salt_bytes: [u8; 16] = rand::random();
    let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| AuthError::PasswordHash {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(hash.to_string())
}

/// Check a candidate password against a stored hash.
///
/// An unparseable stored hash never verifies.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

/// Short digest of a stored hash, carried in session tokens.
///
/// Every password change produces a new salt and therefore a new
/// fingerprint, which invalidates sessions issued before it.
pub fn password_fingerprint(stored_hash: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(stored_hash.as_bytes());
    format!("{:x}", hasher.finalize())[..FINGERPRINT_LENGTH].to_string()
}
