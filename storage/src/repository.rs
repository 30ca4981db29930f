//! Store abstraction used by request-facing code.
//!
//! Only the operations a request may trigger live here; maintenance operations
//! (`clear`, `seed_samples`) stay inherent to [`crate::MessageRepository`].

use crate::error::Result;
use crate::models::MessageRecord;
use async_trait::async_trait;

#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Persists the trimmed `name`/`message` with a fresh id and timestamp; returns the stored row.
    /// Does not validate.
    async fn insert(&self, name: &str, message: &str) -> Result<MessageRecord>;
    /// Every stored message, newest first.
    async fn list_all(&self) -> Result<Vec<MessageRecord>>;
    async fn count(&self) -> Result<i64>;
}
