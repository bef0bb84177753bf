pub mod claims;
pub mod error;
pub mod password;
pub mod principal;
pub mod session_tokens;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use password::{
    MIN_PASSWORD_LENGTH, hash_password, password_fingerprint, validate_new_password,
    verify_password,
};
pub use principal::Principal;
pub use session_tokens::{SessionTokens, generate_secret};
