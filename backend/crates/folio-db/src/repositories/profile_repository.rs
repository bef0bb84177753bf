use crate::Result as DbErrorResult;

use folio_core::{Profile, ProfileDetails};

use chrono::NaiveDate;
use sqlx::{FromRow, SqlitePool};

/// Primary key of the singleton profile row
pub const PROFILE_ID: i64 = 1;

#[derive(FromRow)]
struct ProfileRow {
    id: i64,
    fullname: String,
    location: String,
    birth: NaiveDate,
    age: i32,
    about: String,
    thumbnail: String,
    bg: String,
    password_hash: String,
}

impl From<ProfileRow> for Profile {
    fn from(r: ProfileRow) -> Self {
        Profile {
            id: r.id,
            fullname: r.fullname,
            location: r.location,
            birth: r.birth,
            age: r.age,
            about: r.about,
            thumbnail: r.thumbnail,
            bg: r.bg,
            password_hash: r.password_hash,
        }
    }
}

pub struct ProfileRepository {
    pool: SqlitePool,
}

impl ProfileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert the singleton profile. Fails with `DbError::UniqueViolation`
    /// when the site is already provisioned.
    pub async fn create(
        &self,
        details: &ProfileDetails,
        password_hash: &str,
    ) -> DbErrorResult<Profile> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query(
            r#"
              INSERT INTO profile (id, fullname, location, birth, age, about, password_hash)
              VALUES (?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(PROFILE_ID)
        .bind(&details.fullname)
        .bind(&details.location)
        .bind(details.birth)
        .bind(details.age)
        .bind(&details.about)
        .bind(password_hash)
        .execute(&mut *tx)
        .await;

        if let Err(e) = inserted {
            tx.rollback().await?;
            return Err(e.into());
        }

        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
              SELECT id, fullname, location, birth, age, about, thumbnail, bg, password_hash
              FROM profile
              WHERE id = ?
              "#,
        )
        .bind(PROFILE_ID)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row.into())
    }

    pub async fn find(&self) -> DbErrorResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
              SELECT id, fullname, location, birth, age, about, thumbnail, bg, password_hash
              FROM profile
              WHERE id = ?
              "#,
        )
        .bind(PROFILE_ID)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Profile::from))
    }

    /// Write back every editable field (text fields and image references).
    /// The password hash is only changed through `update_password`.
    pub async fn update(&self, profile: &Profile) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              UPDATE profile
              SET fullname = ?, location = ?, birth = ?, age = ?, about = ?,
                  thumbnail = ?, bg = ?
              WHERE id = ?
              "#,
        )
        .bind(&profile.fullname)
        .bind(&profile.location)
        .bind(profile.birth)
        .bind(profile.age)
        .bind(&profile.about)
        .bind(&profile.thumbnail)
        .bind(&profile.bg)
        .bind(profile.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn update_password(&self, password_hash: &str) -> DbErrorResult<()> {
        sqlx::query("UPDATE profile SET password_hash = ? WHERE id = ?")
            .bind(password_hash)
            .bind(PROFILE_ID)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
