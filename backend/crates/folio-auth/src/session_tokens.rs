use crate::{AuthError, Claims, Principal, Result as AuthErrorResult, password_fingerprint};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of secrets produced by `generate_secret`
const GENERATED_SECRET_LENGTH: usize = 48;

/// Issues and verifies HS256-signed session tokens
pub struct SessionTokens {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl SessionTokens {
    pub fn with_hs256(secret: &[u8], ttl_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 30; // 30 second clock skew tolerance

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl_secs: i64::try_from(ttl_secs).unwrap_or(i64::MAX),
        }
    }

    /// Lifetime of issued tokens, also used as the cookie Max-Age
    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    /// Create a token identifying the given profile.
    ///
    /// The token is bound to `password_hash`; it stops naming the owner once
    /// the password changes.
    #[track_caller]
    pub fn issue(&self, profile_id: i64, password_hash: &str) -> AuthErrorResult<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: profile_id.to_string(),
            iat: now,
            exp: now.saturating_add(self.ttl_secs),
            pwd: password_fingerprint(password_hash),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Validate token and return claims
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }

    /// Validate token and resolve the principal it names
    #[track_caller]
    pub fn principal(&self, token: &str) -> AuthErrorResult<Principal> {
        let claims = self.validate(token)?;
        Principal::from_claims(&claims)
    }
}

/// Random signing secret for deployments that do not configure one
pub fn generate_secret() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_SECRET_LENGTH)
        .map(char::from)
        .collect()
}
