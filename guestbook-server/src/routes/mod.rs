//! Axum router construction.
//!
//! [`build`] assembles the application router:
//! - `GET /` embedded guestbook page
//! - `GET /messages`, `POST /submit` and their `/api/messages` aliases
//! - `GET /health`
//! - JSON 404 fallback, wrapped in the per-request trace middleware

mod health;
mod index;
mod messages;

use axum::{middleware, routing::get, routing::post, Router};

use crate::error::ServerError;
use crate::middleware::trace_middleware;
use crate::state::AppState;

/// Build the complete axum [`Router`] for the application.
pub fn build(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::get_index))
        .route("/messages", get(messages::list_messages))
        .route("/submit", post(messages::submit_message))
        .route(
            "/api/messages",
            get(messages::list_messages).post(messages::submit_message),
        )
        .merge(health::router())
        .fallback(not_found)
        .layer(middleware::from_fn(trace_middleware))
        .with_state(state)
}

async fn not_found() -> ServerError {
    ServerError::NotFound
}
