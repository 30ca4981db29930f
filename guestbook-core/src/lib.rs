//! # guestbook-core
//!
//! Core pieces shared by the storage layer and the server: the input [`validate`] function,
//! the [`GuestbookError`] taxonomy, and tracing initialization. No I/O beyond the log file.

pub mod error;
pub mod logger;
pub mod validation;

pub use error::{GuestbookError, Result, ValidationError};
pub use logger::init_tracing;
pub use validation::{validate, MAX_MESSAGE_LEN, MAX_NAME_LEN};
