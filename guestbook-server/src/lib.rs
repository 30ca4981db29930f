//! # Guestbook server
//!
//! Wires the validator (guestbook-core) and the message store (storage) behind an axum HTTP
//! surface. Config comes from env; the `guestbook` binary also exposes maintenance commands.

pub mod cli;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod service;
pub mod state;

pub use cli::{Cli, Commands};
pub use config::ServerConfig;
pub use error::ServerError;
pub use server::{open_repository, run_server};
pub use service::GuestbookService;
pub use state::AppState;
