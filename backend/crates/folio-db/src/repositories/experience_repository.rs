use crate::{DbError, Result as DbErrorResult};

use folio_core::{Experience, ExperienceDraft, ExperienceKind};

use std::str::FromStr;

use chrono::NaiveDate;
use sqlx::{FromRow, SqlitePool};

#[derive(FromRow)]
struct ExperienceRow {
    id: i64,
    title: String,
    start_date: NaiveDate,
    finish_date: Option<NaiveDate>,
    location: String,
    kind: String,
    description: String,
}

impl TryFrom<ExperienceRow> for Experience {
    type Error = DbError;

    fn try_from(r: ExperienceRow) -> DbErrorResult<Self> {
        let kind = ExperienceKind::from_str(&r.kind)
            .map_err(|_| DbError::decode("experiences", format!("unknown kind '{}'", r.kind)))?;

        Ok(Experience {
            id: r.id,
            title: r.title,
            start_date: r.start_date,
            finish_date: r.finish_date,
            location: r.location,
            kind,
            description: r.description,
        })
    }
}

pub struct ExperienceRepository {
    pool: SqlitePool,
}

impl ExperienceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        kind: ExperienceKind,
        draft: &ExperienceDraft,
    ) -> DbErrorResult<Experience> {
        let done = sqlx::query(
            r#"
              INSERT INTO experiences (title, start_date, finish_date, location, kind, description)
              VALUES (?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(&draft.title)
        .bind(draft.start_date)
        .bind(draft.finish_date)
        .bind(&draft.location)
        .bind(kind.as_str())
        .bind(&draft.description)
        .execute(&self.pool)
        .await?;

        Ok(Experience {
            id: done.last_insert_rowid(),
            title: draft.title.clone(),
            start_date: draft.start_date,
            finish_date: draft.finish_date,
            location: draft.location.clone(),
            kind,
            description: draft.description.clone(),
        })
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Experience>> {
        let row = sqlx::query_as::<_, ExperienceRow>(
            r#"
              SELECT id, title, start_date, finish_date, location, kind, description
              FROM experiences
              WHERE id = ?
              "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Experience::try_from).transpose()
    }

    /// All entries of one kind, most recently created first
    pub async fn find_by_kind(&self, kind: ExperienceKind) -> DbErrorResult<Vec<Experience>> {
        let rows = sqlx::query_as::<_, ExperienceRow>(
            r#"
              SELECT id, title, start_date, finish_date, location, kind, description
              FROM experiences
              WHERE kind = ?
              ORDER BY id DESC
              "#,
        )
        .bind(kind.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Experience::try_from).collect()
    }

    /// Replace every mutable field in a single statement
    pub async fn update(&self, experience: &Experience) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              UPDATE experiences
              SET title = ?, start_date = ?, finish_date = ?, location = ?, description = ?
              WHERE id = ?
              "#,
        )
        .bind(&experience.title)
        .bind(experience.start_date)
        .bind(experience.finish_date)
        .bind(&experience.location)
        .bind(&experience.description)
        .bind(experience.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> DbErrorResult<()> {
        sqlx::query("DELETE FROM experiences WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
