//! # Pulseboard
//!
//! Analytics dashboard server. Hosts the compiled `pulseboard-ui` bundle,
//! answers health probes, and reports whether the analytics API the
//! dashboard reads from is reachable.
//!
//! ## Modules
//!
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML configuration with environment overrides
//! - [`upstream`]: Reachability probe for the analytics API
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pulseboard::{serve, AppState, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let state = AppState::from_config(&config)?;
//!     serve(state, &config.server).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod upstream;

pub use api::{build_router, serve, ApiError, ApiResult, AppState};

pub use config::{Config, ConfigError, LoggingConfig, ServerConfig, UpstreamConfig};

pub use upstream::{UpstreamError, UpstreamProbe, UpstreamStatus};
