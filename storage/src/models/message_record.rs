//! Message record model for persistence.
//!
//! Maps to the `messages` table and is used by MessageRepository.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// ISO-8601 local datetime with microseconds and no offset, e.g. `2024-05-01T09:30:00.123456`.
/// Fixed width, so lexical order on the column is chronological order.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Author of the seed message inserted into an empty store.
pub const WELCOME_NAME: &str = "Welcome Bot";
/// Body of the seed message inserted into an empty store.
pub const WELCOME_MESSAGE: &str =
    "Welcome to our guestbook! Feel free to leave your thoughts and messages here.";

/// Demo visitors inserted by [`crate::MessageRepository::seed_samples`].
pub const SAMPLE_MESSAGES: [(&str, &str); 5] = [
    (
        "Alice Johnson",
        "This is such a wonderful guestbook! Thanks for creating this space for us to share our thoughts.",
    ),
    (
        "Bob Smith",
        "Great work on the design. Very clean and user-friendly!",
    ),
    (
        "Carol Davis",
        "Hello from New York! 👋 Love the simplicity of this guestbook.",
    ),
    (
        "David Wilson",
        "Testing the message functionality. Everything works perfectly!",
    ),
    (
        "Emma Brown",
        "What a lovely way to connect with other visitors. Keep up the great work! 🌟",
    ),
];

/// One guestbook entry as stored. `id` and `timestamp` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct MessageRecord {
    pub id: i64,
    pub name: String,
    pub message: String,
    pub timestamp: String,
}

/// Current server local time in [`TIMESTAMP_FORMAT`].
pub fn now_timestamp() -> String {
    Local::now().naive_local().format(TIMESTAMP_FORMAT).to_string()
}
