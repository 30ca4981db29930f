//! HTTP server startup and shutdown.
//!
//! Startup order: open the store (schema + seed), build the router, bind, serve until Ctrl-C or
//! SIGTERM.

use std::sync::Arc;

use anyhow::{Context, Result};
use storage::MessageRepository;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::routes;
use crate::service::GuestbookService;
use crate::state::AppState;

/// Opens the configured database and ensures the schema and seed message exist.
pub async fn open_repository(config: &ServerConfig) -> Result<MessageRepository> {
    MessageRepository::new(&config.database_url)
        .await
        .with_context(|| format!("Open message store at {}", config.database_url))
}

/// Runs the HTTP server until a shutdown signal arrives.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    info!(version = env!("CARGO_PKG_VERSION"), "guestbook starting");

    let repo = open_repository(&config).await?;
    info!(database_url = %config.database_url, "database ready");

    let service = GuestbookService::new(Arc::new(repo));
    let app = routes::build(AppState::new(service));

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Bind {}", addr))?;
    info!(%addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("guestbook stopped");
    Ok(())
}

/// Resolves when SIGINT (Ctrl-C) or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install CTRL+C signal handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => warn!(error = %e, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("shutdown signal received; starting graceful shutdown");
}
