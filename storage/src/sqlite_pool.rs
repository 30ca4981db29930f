//! SQLite connection pool wrapper for the storage crate.

use std::str::FromStr;

use sqlx::{sqlite::SqliteConnectOptions, SqlitePool};
use tracing::info;

/// Manages a single SQLite pool; creates DB file if missing.
///
/// Connections are checked out per query or transaction and returned to the pool when the
/// guard drops, on success and error paths alike.
#[derive(Clone, Debug)]
pub struct SqlitePoolManager {
    pool: SqlitePool,
}

impl SqlitePoolManager {
    /// Creates a pool for the given database URL: a `sqlite:` URL or a plain file path.
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        info!(database_url, "Initializing SQLite pool");

        let options = if database_url.starts_with("sqlite:") {
            SqliteConnectOptions::from_str(database_url)?.create_if_missing(true)
        } else {
            SqliteConnectOptions::new()
                .create_if_missing(true)
                .filename(database_url)
        };

        let pool = SqlitePool::connect_with(options).await?;

        Ok(Self { pool })
    }

    /// Returns the underlying pool for running queries.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
