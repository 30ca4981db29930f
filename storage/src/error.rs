//! Storage error types.
//!
//! Every persistence-layer failure (connection, constraint, I/O) ends up as
//! [`StorageError::Database`]; callers must not show the detail to end users.

use thiserror::Error;

/// Errors that can occur when using storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for StorageError {
    fn from(e: sqlx::Error) -> Self {
        StorageError::Database(e.to_string())
    }
}

/// Result type for storage operations; uses [`StorageError`].
pub type Result<T> = std::result::Result<T, StorageError>;
