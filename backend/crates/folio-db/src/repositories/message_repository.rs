use crate::{DbError, Result as DbErrorResult};

use folio_core::{Message, NewMessage};

use chrono::DateTime;
use sqlx::{FromRow, SqlitePool};

#[derive(FromRow)]
struct MessageRow {
    id: i64,
    name: String,
    email: String,
    subject: String,
    content: String,
    postage_date: i64,
}

impl TryFrom<MessageRow> for Message {
    type Error = DbError;

    fn try_from(r: MessageRow) -> DbErrorResult<Self> {
        let postage_date = DateTime::from_timestamp(r.postage_date, 0).ok_or_else(|| {
            DbError::decode(
                "messages",
                format!("postage_date {} out of range", r.postage_date),
            )
        })?;

        Ok(Message {
            id: r.id,
            name: r.name,
            email: r.email,
            subject: r.subject,
            content: r.content,
            postage_date,
        })
    }
}

/// Inbox storage. Messages are written by the public contact form; the
/// admin panel only reads and deletes them.
pub struct MessageRepository {
    pool: SqlitePool,
}

impl MessageRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, message: &NewMessage) -> DbErrorResult<Message> {
        let postage_date = message.postage_date.timestamp();

        let done = sqlx::query(
            r#"
              INSERT INTO messages (name, email, subject, content, postage_date)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.subject)
        .bind(&message.content)
        .bind(postage_date)
        .execute(&self.pool)
        .await?;

        let id = done.last_insert_rowid();
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DbError::decode("messages", format!("message {} vanished", id)))
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Message>> {
        let row = sqlx::query_as::<_, MessageRow>(
            r#"
              SELECT id, name, email, subject, content, postage_date
              FROM messages
              WHERE id = ?
              "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Message::try_from).transpose()
    }

    /// All messages, newest postage date first
    pub async fn find_all(&self) -> DbErrorResult<Vec<Message>> {
        let rows = sqlx::query_as::<_, MessageRow>(
            r#"
              SELECT id, name, email, subject, content, postage_date
              FROM messages
              ORDER BY postage_date DESC, id DESC
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Message::try_from).collect()
    }

    pub async fn delete(&self, id: i64) -> DbErrorResult<()> {
        sqlx::query("DELETE FROM messages WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
