//! Health Routes
//!
//! Health check endpoints for monitoring and container probes.
//!
//! - GET /api/health - Plain health status (`{"status":"ok"}`)
//! - GET /api/health/live - Liveness probe (process is alive)
//! - GET /api/health/ready - Readiness probe (analytics upstream reachable)

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::{HealthResponse, ReadinessResponse};
use crate::api::state::AppState;

/// GET /api/health
///
/// No inputs, no dependency checks.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// GET /api/health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /api/health/ready
///
/// Returns 503 when a configured analytics upstream cannot be reached.
pub async fn readiness(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let upstream = state.upstream.status().await;

    let (code, status) = if upstream.is_ready() {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        code,
        Json(ReadinessResponse {
            status: status.to_string(),
            upstream: upstream.as_str().to_string(),
            uptime_seconds: state.uptime_seconds(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_body() {
        let Json(body) = health().await;
        assert_eq!(body, HealthResponse::ok());
    }
}
