//! Readiness check: the guestbook is healthy when its store answers a count query.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(get_health))
}

/// `200 {"status":"ok","messages":N}` when the store is reachable, otherwise
/// `503 {"status":"unavailable"}`. Store errors are logged by the service.
pub async fn get_health(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.service.message_count().await {
        Ok(messages) => (
            StatusCode::OK,
            Json(json!({ "status": "ok", "messages": messages })),
        ),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "unavailable" })),
        ),
    }
}
