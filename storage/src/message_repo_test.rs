//! Unit tests for MessageRepository.
//!
//! Covers initialization/seeding, transactional insert, and maintenance operations.

use crate::message_repo::MessageRepository;
use crate::models::{SAMPLE_MESSAGES, WELCOME_MESSAGE, WELCOME_NAME};
use crate::repository::MessageStore;
use crate::sqlite_pool::SqlitePoolManager;
use tempfile::TempDir;

fn fresh_db_path() -> (TempDir, String) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("unit.db");
    (dir, path.to_string_lossy().into_owned())
}

#[tokio::test]
async fn test_new_seeds_welcome_message() {
    let (_dir, database_url) = fresh_db_path();
    let repo = MessageRepository::new(&database_url)
        .await
        .expect("Failed to create repository");

    let messages = repo.list_all().await.expect("Failed to list");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].name, WELCOME_NAME);
    assert_eq!(messages[0].message, WELCOME_MESSAGE);
}

#[tokio::test]
async fn test_initialize_is_idempotent() {
    let (_dir, database_url) = fresh_db_path();
    let repo = MessageRepository::new(&database_url)
        .await
        .expect("Failed to create repository");

    repo.initialize().await.expect("second initialize");
    repo.initialize().await.expect("third initialize");

    assert_eq!(repo.count().await.expect("count"), 1);
}

#[tokio::test]
async fn test_from_pool_does_not_create_schema() {
    let (_dir, database_url) = fresh_db_path();
    let pool = SqlitePoolManager::new(&database_url)
        .await
        .expect("Failed to create pool");
    let repo = MessageRepository::from_pool(pool);

    assert!(repo.count().await.is_err());

    repo.initialize().await.expect("initialize");
    assert_eq!(repo.count().await.expect("count"), 1);
}

#[tokio::test]
async fn test_insert_trims_fields() {
    let (_dir, database_url) = fresh_db_path();
    let repo = MessageRepository::new(&database_url)
        .await
        .expect("Failed to create repository");

    let saved = repo
        .insert("  Alice  ", "\tHi there\n")
        .await
        .expect("Failed to insert");

    assert_eq!(saved.name, "Alice");
    assert_eq!(saved.message, "Hi there");
}

#[tokio::test]
async fn test_clear_then_seed_samples() {
    let (_dir, database_url) = fresh_db_path();
    let repo = MessageRepository::new(&database_url)
        .await
        .expect("Failed to create repository");

    let deleted = repo.clear().await.expect("clear");
    assert_eq!(deleted, 1);
    assert_eq!(repo.count().await.expect("count"), 0);

    let added = repo.seed_samples().await.expect("seed samples");
    assert_eq!(added, SAMPLE_MESSAGES.len());

    let messages = repo.list_all().await.expect("list");
    assert_eq!(messages.len(), SAMPLE_MESSAGES.len());
    for (name, _) in SAMPLE_MESSAGES {
        assert!(messages.iter().any(|m| m.name == name));
    }
}

#[tokio::test]
async fn test_initialize_after_clear_reseeds_once() {
    let (_dir, database_url) = fresh_db_path();
    let repo = MessageRepository::new(&database_url)
        .await
        .expect("Failed to create repository");

    repo.clear().await.expect("clear");
    repo.initialize().await.expect("initialize");
    repo.initialize().await.expect("initialize again");

    let messages = repo.list_all().await.expect("list");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].name, WELCOME_NAME);
}
