use crate::{DbError, Result as DbErrorResult};

use folio_core::{Ability, AbilityKind, NewAbility};

use std::str::FromStr;

use sqlx::{FromRow, SqlitePool};

#[derive(FromRow)]
struct AbilityRow {
    id: i64,
    name: String,
    scale: i32,
    kind: String,
}

impl TryFrom<AbilityRow> for Ability {
    type Error = DbError;

    fn try_from(r: AbilityRow) -> DbErrorResult<Self> {
        let kind = AbilityKind::from_str(&r.kind)
            .map_err(|_| DbError::decode("abilities", format!("unknown kind '{}'", r.kind)))?;

        Ok(Ability {
            id: r.id,
            name: r.name,
            scale: r.scale,
            kind,
        })
    }
}

pub struct AbilityRepository {
    pool: SqlitePool,
}

impl AbilityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert inside a transaction that is rolled back explicitly when the
    /// `(name, kind)` pair already exists.
    pub async fn create(&self, ability: &NewAbility) -> DbErrorResult<Ability> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query("INSERT INTO abilities (name, scale, kind) VALUES (?, ?, ?)")
            .bind(&ability.name)
            .bind(ability.scale)
            .bind(ability.kind.as_str())
            .execute(&mut *tx)
            .await;

        let done = match inserted {
            Ok(done) => done,
            Err(e) => {
                tx.rollback().await?;
                return Err(e.into());
            }
        };

        tx.commit().await?;

        Ok(Ability {
            id: done.last_insert_rowid(),
            name: ability.name.clone(),
            scale: ability.scale,
            kind: ability.kind,
        })
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Ability>> {
        let row = sqlx::query_as::<_, AbilityRow>(
            "SELECT id, name, scale, kind FROM abilities WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Ability::try_from).transpose()
    }

    /// All abilities of one kind, most recently created first
    pub async fn find_by_kind(&self, kind: AbilityKind) -> DbErrorResult<Vec<Ability>> {
        let rows = sqlx::query_as::<_, AbilityRow>(
            r#"
              SELECT id, name, scale, kind
              FROM abilities
              WHERE kind = ?
              ORDER BY id DESC
              "#,
        )
        .bind(kind.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Ability::try_from).collect()
    }

    pub async fn delete(&self, id: i64) -> DbErrorResult<()> {
        sqlx::query("DELETE FROM abilities WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
