//! echo-api entry point.
//!
//! Initializes tracing, loads configuration (file, then env/CLI overrides),
//! builds the router and serves it until a termination signal.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use echo_api::cli::Args;
use echo_api::config::{LogFormat, DEFAULT_LOG_FILTER};
use echo_api::http::start_server;
use echo_api::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = args.load_config()?;

    // Log filter priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, config.logging.format);

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        invalid_body = ?config.echo.invalid_body,
        max_body_bytes = config.echo.max_body_bytes,
        "Loaded configuration"
    );

    let app = create_router(AppState::new(config.clone()));
    start_server(app, &config).await?;

    Ok(())
}

fn init_tracing(filter: &str, format: LogFormat) {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(filter));

    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
            .init(),
    }
}
