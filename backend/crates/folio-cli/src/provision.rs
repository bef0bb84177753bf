//! Owner provisioning against an open pool

use crate::{CliError, Result as CliResult};

use folio_auth::hash_password;
use folio_core::{Profile, ProfileDetails};
use folio_db::{DbError, ProfileRepository};

use sqlx::SqlitePool;

/// Raw values for the owner profile, as typed on the command line
#[derive(Debug, Clone)]
pub struct InitProfile {
    pub fullname: String,
    pub location: String,
    pub birth: String,
    pub age: String,
    pub about: String,
    pub password: String,
}

/// Create the singleton profile with default images
pub async fn init_profile(pool: &SqlitePool, input: &InitProfile) -> CliResult<Profile> {
    let details = ProfileDetails::parse(
        &input.fullname,
        &input.location,
        &input.birth,
        &input.age,
        &input.about,
    )?;
    let hash = hash_password(&input.password)?;

    match ProfileRepository::new(pool.clone())
        .create(&details, &hash)
        .await
    {
        Ok(profile) => Ok(profile),
        Err(DbError::UniqueViolation { .. }) => Err(CliError::already_provisioned()),
        Err(e) => Err(e.into()),
    }
}

pub async fn set_password(pool: &SqlitePool, password: &str) -> CliResult<()> {
    let repo = ProfileRepository::new(pool.clone());
    if repo.find().await?.is_none() {
        return Err(CliError::not_provisioned());
    }

    let hash = hash_password(password)?;
    repo.update_password(&hash).await?;

    Ok(())
}
