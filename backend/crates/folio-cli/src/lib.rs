//! folio-cli library
//!
//! Provisioning operations, exported so they can be run against any pool.

pub mod error;
pub mod provision;


pub use error::{CliError, Result};
pub use provision::{InitProfile, init_profile, set_password};
