//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use crate::config::{Config, ServerConfig};
use crate::upstream::{UpstreamError, UpstreamProbe};
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Reachability probe for the analytics API
    pub upstream: Arc<UpstreamProbe>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: ServerConfig, upstream: UpstreamProbe) -> Self {
        Self {
            config: Arc::new(config),
            upstream: Arc::new(upstream),
            start_time: Instant::now(),
        }
    }

    /// Build state from the full configuration
    pub fn from_config(config: &Config) -> Result<Self, UpstreamError> {
        let upstream = UpstreamProbe::new(&config.upstream)?;
        Ok(Self::new(config.server.clone(), upstream))
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
