//! Storage crate: guestbook message persistence.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – MessageRecord and the seed/sample content
//! - [`repository`] – MessageStore trait (the request-facing subset of the store)
//! - [`message_repo`] – MessageRepository (SQLite)
//! - [`sqlite_pool`] – SqlitePoolManager

mod error;
mod message_repo;
mod models;
mod repository;
mod sqlite_pool;

#[cfg(test)]
mod message_repo_test;

pub use error::{Result, StorageError};
pub use message_repo::MessageRepository;
pub use models::{
    now_timestamp, MessageRecord, SAMPLE_MESSAGES, TIMESTAMP_FORMAT, WELCOME_MESSAGE, WELCOME_NAME,
};
pub use repository::MessageStore;
pub use sqlite_pool::SqlitePoolManager;
