use crate::Result as DbErrorResult;

use folio_core::{Contact, NewContact};

use sqlx::{FromRow, SqlitePool};

#[derive(FromRow)]
struct ContactRow {
    id: i64,
    name: String,
    address: String,
    logo: Option<String>,
}

impl From<ContactRow> for Contact {
    fn from(r: ContactRow) -> Self {
        Contact {
            id: r.id,
            name: r.name,
            address: r.address,
            logo: r.logo,
        }
    }
}

pub struct ContactRepository {
    pool: SqlitePool,
}

impl ContactRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert inside a transaction that is rolled back explicitly when the
    /// name is already taken.
    pub async fn create(&self, contact: &NewContact) -> DbErrorResult<Contact> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query("INSERT INTO contacts (name, address, logo) VALUES (?, ?, ?)")
            .bind(&contact.name)
            .bind(&contact.address)
            .bind(&contact.logo)
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

        Ok(Contact {
            id: done.last_insert_rowid(),
            name: contact.name.clone(),
            address: contact.address.clone(),
            logo: contact.logo.clone(),
        })
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Contact>> {
        let row = sqlx::query_as::<_, ContactRow>(
            "SELECT id, name, address, logo FROM contacts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Contact::from))
    }

    /// All contacts, most recently created first
    pub async fn find_all(&self) -> DbErrorResult<Vec<Contact>> {
        let rows = sqlx::query_as::<_, ContactRow>(
            "SELECT id, name, address, logo FROM contacts ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Contact::from).collect())
    }

    pub async fn delete(&self, id: i64) -> DbErrorResult<()> {
        sqlx::query("DELETE FROM contacts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
