//! Request-facing guestbook operations: validated create and ordered list.
//!
//! Validation failures never reach the store. Store failures are logged here with full detail
//! and handed back as [`GuestbookError::Storage`].

use std::sync::Arc;

use guestbook_core::{validate, GuestbookError, Result};
use storage::{MessageRecord, MessageStore};
use tracing::{error, info, instrument};

#[derive(Clone)]
pub struct GuestbookService {
    store: Arc<dyn MessageStore>,
}

impl GuestbookService {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }

    /// Validates and stores a submission. `None` means the field was absent.
    #[instrument(skip(self, name, message))]
    pub async fn create_message(
        &self,
        name: Option<&str>,
        message: Option<&str>,
    ) -> Result<MessageRecord> {
        let errors = validate(name, message);
        if !errors.is_empty() {
            info!(?errors, "Rejected submission");
            return Err(GuestbookError::Validation(errors));
        }

        let name = name.unwrap_or_default().trim();
        let message = message.unwrap_or_default().trim();

        let record = self.store.insert(name, message).await.map_err(|e| {
            error!(error = %e, "Failed to save message");
            GuestbookError::Storage(e.to_string())
        })?;

        Ok(record)
    }

    /// All messages, newest first.
    #[instrument(skip(self))]
    pub async fn list_messages(&self) -> Result<Vec<MessageRecord>> {
        self.store.list_all().await.map_err(|e| {
            error!(error = %e, "Failed to fetch messages");
            GuestbookError::Storage(e.to_string())
        })
    }

    /// Number of stored messages; used as the readiness check.
    pub async fn message_count(&self) -> Result<i64> {
        self.store.count().await.map_err(|e| {
            error!(error = %e, "Failed to count messages");
            GuestbookError::Storage(e.to_string())
        })
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use storage::{MessageRecord, MessageStore, StorageError};

    /// In-process store keeping insertion order; timestamps are a counter.
    #[derive(Default)]
    pub struct MockStore {
        records: Mutex<Vec<MessageRecord>>,
    }

    impl MockStore {
        pub fn len(&self) -> usize {
            self.records.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl MessageStore for MockStore {
        async fn insert(&self, name: &str, message: &str) -> storage::Result<MessageRecord> {
            let mut records = self.records.lock().unwrap();
            let id = records.len() as i64 + 1;
            let record = MessageRecord {
                id,
                name: name.trim().to_string(),
                message: message.trim().to_string(),
                timestamp: format!("2024-01-01T00:00:{:02}.000000", id),
            };
            records.push(record.clone());
            Ok(record)
        }

        async fn list_all(&self) -> storage::Result<Vec<MessageRecord>> {
            let mut records = self.records.lock().unwrap().clone();
            records.reverse();
            Ok(records)
        }

        async fn count(&self) -> storage::Result<i64> {
            Ok(self.len() as i64)
        }
    }

    /// Store whose every call fails, to exercise the storage-failure path.
    pub struct FailingStore;

    #[async_trait]
    impl MessageStore for FailingStore {
        async fn insert(&self, _name: &str, _message: &str) -> storage::Result<MessageRecord> {
            Err(StorageError::Database("database is locked".to_string()))
        }

        async fn list_all(&self) -> storage::Result<Vec<MessageRecord>> {
            Err(StorageError::Database("no such table: messages".to_string()))
        }

        async fn count(&self) -> storage::Result<i64> {
            Err(StorageError::Database("no such table: messages".to_string()))
        }
    }
}
