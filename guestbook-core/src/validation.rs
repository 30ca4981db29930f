//! Validation of guestbook submissions.
//!
//! Pure functions; no side effects. Lengths are counted in characters after trimming
//! surrounding whitespace.

use crate::error::ValidationError;

/// Maximum name length in characters, after trimming.
pub const MAX_NAME_LEN: usize = 50;
/// Maximum message length in characters, after trimming.
pub const MAX_MESSAGE_LEN: usize = 500;

/// Checks a submission and returns every problem found; an empty vec means valid.
///
/// `None` models an absent field. Each field reports at most one error.
pub fn validate(name: Option<&str>, message: Option<&str>) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(err) = check_field(
        name,
        MAX_NAME_LEN,
        ValidationError::MissingName,
        ValidationError::NameTooLong,
    ) {
        errors.push(err);
    }

    if let Some(err) = check_field(
        message,
        MAX_MESSAGE_LEN,
        ValidationError::MissingMessage,
        ValidationError::MessageTooLong,
    ) {
        errors.push(err);
    }

    errors
}

fn check_field(
    value: Option<&str>,
    max_len: usize,
    missing: ValidationError,
    too_long: ValidationError,
) -> Option<ValidationError> {
    let trimmed = value.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        Some(missing)
    } else if trimmed.chars().count() > max_len {
        Some(too_long)
    } else {
        None
    }
}
