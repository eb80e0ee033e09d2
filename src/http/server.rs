//! HTTP server startup logic.

use std::net::TcpListener;
use std::time::Duration;

use axum::Router;
use axum_server::Handle;

use crate::config::{AppConfig, ConfigError};

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address: {0}")]
    Address(#[from] ConfigError),

    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Bind the configured address and serve `app` until a shutdown signal.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr = config.http.socket_addr()?;
    let listener = TcpListener::bind(addr)?;

    let handle = Handle::new();
    shutdown::setup_shutdown_handler(
        handle.clone(),
        Duration::from_secs(config.http.shutdown_timeout_seconds),
    );

    serve(app, listener, handle).await
}

/// Serve `app` on an already bound listener.
///
/// Returns once `handle` has been told to shut down and the remaining
/// connections are closed.
pub async fn serve(app: Router, listener: TcpListener, handle: Handle) -> Result<(), ServerError> {
    let addr = listener.local_addr()?;
    listener.set_nonblocking(true)?;

    tracing::info!(%addr, "Starting HTTP server");

    axum_server::from_tcp(listener)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    tracing::info!(%addr, "HTTP server stopped");
    Ok(())
}
