//! Message repository: persistence and queries for guestbook messages.
//!
//! Uses SqlitePoolManager and MessageRecord. External: SQLite via sqlx.
//! Each write runs in its own transaction; the transaction rolls back if dropped before commit.

use crate::error::Result;
use crate::models::{now_timestamp, MessageRecord, SAMPLE_MESSAGES, WELCOME_MESSAGE, WELCOME_NAME};
use crate::repository::MessageStore;
use crate::sqlite_pool::SqlitePoolManager;
use async_trait::async_trait;
use sqlx::{Sqlite, Transaction};
use tracing::{debug, info};

#[derive(Clone, Debug)]
pub struct MessageRepository {
    pool_manager: SqlitePoolManager,
}

impl MessageRepository {
    /// Opens the database at `database_url` and runs [`Self::initialize`].
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let repo = Self::from_pool(pool_manager);
        repo.initialize().await?;
        Ok(repo)
    }

    /// Wraps an existing pool without touching the schema.
    pub fn from_pool(pool_manager: SqlitePoolManager) -> Self {
        Self { pool_manager }
    }

    /// Creates the `messages` table if needed and seeds the welcome message when it is empty.
    /// Safe to call on every start.
    pub async fn initialize(&self) -> Result<()> {
        info!("Creating database tables if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS messages (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                message TEXT NOT NULL,
                timestamp TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_messages_timestamp ON messages(timestamp)")
            .execute(pool)
            .await?;

        // Check and insert in one statement: the write lock is held before the emptiness check.
        let seeded = sqlx::query(
            r#"
            INSERT INTO messages (name, message, timestamp)
            SELECT ?, ?, ?
            WHERE NOT EXISTS (SELECT 1 FROM messages)
            "#,
        )
        .bind(WELCOME_NAME)
        .bind(WELCOME_MESSAGE)
        .bind(now_timestamp())
        .execute(pool)
        .await?;

        if seeded.rows_affected() > 0 {
            info!(id = seeded.last_insert_rowid(), "Seeded welcome message");
        }

        info!("Database initialized");
        Ok(())
    }

    /// Deletes every message. Maintenance only; returns the number of rows removed.
    pub async fn clear(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM messages")
            .execute(self.pool_manager.pool())
            .await?;

        info!(deleted = result.rows_affected(), "Cleared all messages");
        Ok(result.rows_affected())
    }

    /// Inserts the demo visitors in [`SAMPLE_MESSAGES`]. Maintenance only; returns how many.
    pub async fn seed_samples(&self) -> Result<usize> {
        let mut tx = self.pool_manager.pool().begin().await?;
        for (name, message) in SAMPLE_MESSAGES {
            insert_in(&mut tx, name, message).await?;
        }
        tx.commit().await?;

        info!(count = SAMPLE_MESSAGES.len(), "Added sample messages");
        Ok(SAMPLE_MESSAGES.len())
    }
}

/// Inserts one row inside `tx` and reads it back by rowid.
async fn insert_in(
    tx: &mut Transaction<'_, Sqlite>,
    name: &str,
    message: &str,
) -> Result<MessageRecord> {
    let result = sqlx::query("INSERT INTO messages (name, message, timestamp) VALUES (?, ?, ?)")
        .bind(name.trim())
        .bind(message.trim())
        .bind(now_timestamp())
        .execute(&mut **tx)
        .await?;

    let record = sqlx::query_as::<_, MessageRecord>(
        "SELECT id, name, message, timestamp FROM messages WHERE id = ?",
    )
    .bind(result.last_insert_rowid())
    .fetch_one(&mut **tx)
    .await?;

    Ok(record)
}

#[async_trait]
impl MessageStore for MessageRepository {
    async fn insert(&self, name: &str, message: &str) -> Result<MessageRecord> {
        let mut tx = self.pool_manager.pool().begin().await?;
        let record = insert_in(&mut tx, name, message).await?;
        tx.commit().await?;

        info!(id = record.id, name = %record.name, "Saved message");
        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<MessageRecord>> {
        let messages = sqlx::query_as::<_, MessageRecord>(
            "SELECT id, name, message, timestamp FROM messages ORDER BY timestamp DESC, id DESC",
        )
        .fetch_all(self.pool_manager.pool())
        .await?;

        debug!("Retrieved {} messages", messages.len());
        Ok(messages)
    }

    async fn count(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM messages")
            .fetch_one(self.pool_manager.pool())
            .await?;
        Ok(count)
    }
}
