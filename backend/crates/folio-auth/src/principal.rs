use crate::{AuthError, Claims, Result as AuthErrorResult, password_fingerprint};

use std::panic::Location;

use error_location::ErrorLocation;

/// Identity carried by a verified session token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub profile_id: i64,
    pub password_fingerprint: String,
}

impl Principal {
    #[track_caller]
    pub fn from_claims(claims: &Claims) -> AuthErrorResult<Self> {
        let profile_id = claims
            .sub
            .parse::<i64>()
            .map_err(|_| AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: format!("'{}' is not a profile id", claims.sub),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            profile_id,
            password_fingerprint: claims.pwd.clone(),
        })
    }

    /// Whether this principal is the given profile
    pub fn is(&self, profile_id: i64) -> bool {
        self.profile_id == profile_id
    }

    /// Whether the session was issued against the current password
    pub fn matches_password(&self, stored_hash: &str) -> bool {
        self.password_fingerprint == password_fingerprint(stored_hash)
    }
}
