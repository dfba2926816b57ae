//! Data Transfer Objects
//!
//! Response types for the health endpoints.

use serde::{Deserialize, Serialize};

/// Body of `GET /api/health`
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    /// Always "ok" while the process is serving
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Body of `GET /api/health/ready`
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    /// "ready" or "degraded"
    pub status: String,
    /// Analytics upstream status: "ok", "error" or "unconfigured"
    pub upstream: String,
    pub uptime_seconds: u64,
    pub version: String,
}
