//! Error types for the guestbook.
//!
//! [`GuestbookError`] is what request-facing operations return; [`ValidationError`] names a
//! single reason a submission was rejected.

use thiserror::Error;

/// A single user-correctable problem with a submitted name or message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required")]
    MissingName,

    #[error("Name must be 50 characters or less")]
    NameTooLong,

    #[error("Message is required")]
    MissingMessage,

    #[error("Message must be 500 characters or less")]
    MessageTooLong,
}

/// Top-level error for guestbook operations.
///
/// `Validation` is surfaced to the caller with every reason; `Storage` carries the internal
/// detail for logging only and must be reported to callers as an opaque failure.
#[derive(Error, Debug)]
pub enum GuestbookError {
    #[error("{}", join_reasons(.0))]
    Validation(Vec<ValidationError>),

    #[error("Storage failure: {0}")]
    Storage(String),
}

fn join_reasons(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for guestbook operations; uses [`GuestbookError`].
pub type Result<T> = std::result::Result<T, GuestbookError>;
