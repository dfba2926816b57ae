//! Analytics Upstream Probe
//!
//! HTTP client for checking that the analytics API the dashboard reads from
//! is reachable. The server never proxies or interprets analytics data.

use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

use crate::config::UpstreamConfig;

/// Path of the analytics endpoint relative to the upstream base URL
pub const ANALYTICS_PATH: &str = "/api/analytics";

/// Reachability probe for the analytics API
pub struct UpstreamProbe {
    client: Client,
    analytics_url: Option<String>,
}

/// Outcome of a single probe, as reported by the readiness endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamStatus {
    /// No upstream configured; nothing to check
    Unconfigured,
    Reachable,
    Unreachable,
}

impl UpstreamStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpstreamStatus::Unconfigured => "unconfigured",
            UpstreamStatus::Reachable => "ok",
            UpstreamStatus::Unreachable => "error",
        }
    }

    /// Whether the server should report itself ready
    pub fn is_ready(&self) -> bool {
        !matches!(self, UpstreamStatus::Unreachable)
    }
}

impl UpstreamProbe {
    /// Create a probe from upstream configuration
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.probe_timeout_ms))
            .build()
            .map_err(UpstreamError::Request)?;

        Ok(Self {
            client,
            analytics_url: config.analytics_base_url.as_deref().map(analytics_url),
        })
    }

    /// Full analytics URL being probed, if configured
    pub fn analytics_url(&self) -> Option<&str> {
        self.analytics_url.as_deref()
    }

    /// Issue one GET against the analytics endpoint
    pub async fn check(&self) -> Result<(), UpstreamError> {
        let url = self.analytics_url.as_deref().ok_or(UpstreamError::NotConfigured)?;

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                UpstreamError::Timeout
            } else if e.is_connect() {
                UpstreamError::Unavailable
            } else {
                UpstreamError::Request(e)
            }
        })?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(UpstreamError::Status(response.status().as_u16()))
        }
    }

    /// Probe and collapse the result into a status, logging failures
    pub async fn status(&self) -> UpstreamStatus {
        match self.check().await {
            Ok(()) => UpstreamStatus::Reachable,
            Err(UpstreamError::NotConfigured) => UpstreamStatus::Unconfigured,
            Err(e) => {
                tracing::warn!(url = ?self.analytics_url, error = %e, "Analytics upstream probe failed");
                UpstreamStatus::Unreachable
            }
        }
    }
}

/// Build `<base>/api/analytics`, tolerating a trailing slash on the base
pub fn analytics_url(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), ANALYTICS_PATH)
}

/// Upstream probe errors
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Analytics upstream not configured")]
    NotConfigured,

    #[error("Analytics upstream unavailable")]
    Unavailable,

    #[error("Analytics upstream timed out")]
    Timeout,

    #[error("Analytics upstream returned status {0}")]
    Status(u16),

    #[error("Request failed: {0}")]
    Request(#[source] reqwest::Error),
}
