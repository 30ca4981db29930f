//! Unified HTTP error type.
//!
//! Handlers return `Result<T, ServerError>`; [`IntoResponse`] turns it into a JSON body
//! `{"error": ...}` with a matching status. Validation reasons are shown to the caller verbatim.
//! Storage failures are reported only as a generic message; the service logs the detail.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use guestbook_core::{GuestbookError, ValidationError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    /// One or more user-correctable problems with the submission.
    #[error("{}", .0.join("; "))]
    Validation(Vec<String>),

    /// The store failed while creating a message.
    #[error("failed to save message: {0}")]
    SaveFailed(String),

    /// The store failed while listing messages.
    #[error("failed to fetch messages: {0}")]
    FetchFailed(String),

    /// The request body could not be decoded.
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("Page not found")]
    NotFound,
}

impl ServerError {
    /// Maps an error from the create operation.
    pub fn from_create(e: GuestbookError) -> Self {
        match e {
            GuestbookError::Validation(errors) => ServerError::Validation(reasons(&errors)),
            GuestbookError::Storage(detail) => ServerError::SaveFailed(detail),
        }
    }

    /// Maps an error from the list operation.
    pub fn from_list(e: GuestbookError) -> Self {
        match e {
            GuestbookError::Validation(errors) => ServerError::Validation(reasons(&errors)),
            GuestbookError::Storage(detail) => ServerError::FetchFailed(detail),
        }
    }
}

fn reasons(errors: &[ValidationError]) -> Vec<String> {
    errors.iter().map(ToString::to_string).collect()
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ServerError::Validation(reasons) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": reasons.join("; "), "errors": reasons }),
            ),
            ServerError::BadRequest(m) => (StatusCode::BAD_REQUEST, json!({ "error": m })),
            ServerError::NotFound => (StatusCode::NOT_FOUND, json!({ "error": "Page not found" })),
            ServerError::SaveFailed(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Failed to save message" }),
            ),
            ServerError::FetchFailed(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Failed to fetch messages" }),
            ),
        };
        (status, Json(body)).into_response()
    }
}
