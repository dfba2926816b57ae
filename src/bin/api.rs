//! Pulseboard Server
//!
//! Run with: cargo run --bin pulseboard-server
//!
//! # Configuration
//!
//! Configuration is read from the first of
//! `~/.config/pulseboard/config.toml`, `/etc/pulseboard/config.toml`,
//! `./config.toml`, or `--config <path>`. Environment variables override it:
//! - `PULSEBOARD_HOST`: Host to bind to (default: 0.0.0.0)
//! - `PULSEBOARD_PORT`: Port to listen on (default: 8080)
//! - `PULSEBOARD_STATIC_DIR`: Built dashboard directory (default: pulseboard-ui/dist)
//! - `PULSEBOARD_API_BASE_URL`: Analytics API base URL (optional, enables readiness probing)
//! - `PULSEBOARD_LOG_LEVEL`: Log level (default: info)
//! - `PULSEBOARD_LOG_FORMAT`: `pretty` or `json` (default: pretty)
//! - `RUST_LOG`: Full filter directive, takes precedence over the log level

use clap::Parser;
use pulseboard::api::{serve, AppState};
use pulseboard::config::{Config, LoggingConfig};
use pulseboard::upstream::UpstreamError;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pulseboard-server")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve the Pulseboard analytics dashboard")]
struct Args {
    /// Config file path (default: search standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    init_tracing(&config.logging);

    tracing::info!("Starting Pulseboard server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Static directory: {:?}", config.server.static_dir);

    let state = AppState::from_config(&config)?;

    match state.upstream.analytics_url() {
        Some(url) => {
            tracing::info!("Analytics upstream: {}", url);
            match state.upstream.check().await {
                Ok(()) => tracing::info!("Analytics upstream reachable"),
                Err(UpstreamError::Status(code)) => {
                    tracing::warn!("Analytics upstream answered with status {}", code)
                }
                Err(e) => tracing::warn!("Analytics upstream not available: {}", e),
            }
        }
        None => tracing::info!(
            "No analytics upstream configured (set PULSEBOARD_API_BASE_URL to enable readiness probing)"
        ),
    }

    serve(state, &config.server).await?;

    tracing::info!("Pulseboard server stopped");
    Ok(())
}

/// Initialize tracing from logging configuration
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("pulseboard={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
