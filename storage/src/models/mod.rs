//! Persistence models for the `messages` table.

mod message_record;

pub use message_record::{
    now_timestamp, MessageRecord, SAMPLE_MESSAGES, TIMESTAMP_FORMAT, WELCOME_MESSAGE, WELCOME_NAME,
};
