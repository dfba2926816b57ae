//! Pulseboard HTTP Server
//!
//! HTTP layer for Pulseboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Health
//! - `GET /api/health` - Health status (`{"status":"ok"}`)
//! - `GET /api/health/live` - Liveness probe
//! - `GET /api/health/ready` - Readiness probe (analytics upstream)
//!
//! ## Dashboard
//! - `GET /*` - Compiled dashboard bundle. Paths that do not match a file
//!   are answered with `index.html` so the client router can resolve
//!   `/dashboard`, `/login` and its own not-found page.
//!
//! # Example
//!
//! ```rust,ignore
//! use pulseboard::api::{serve, AppState};
//! use pulseboard::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let state = AppState::from_config(&config)?;
//!     serve(state, &config.server).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    extract::{OriginalUri, Request},
    http::{HeaderValue, Method},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::convert::Infallible;
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::ServerConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(routes::health::health))
        .route("/health/live", get(routes::health::liveness))
        .route("/health/ready", get(routes::health::readiness))
        .fallback(api_not_found);

    let static_dir = state.config.static_dir.clone();
    let index = static_dir.join("index.html");
    let dashboard = ServeDir::new(&static_dir).fallback(ServeFile::new(index));
    let fallback = move |request: Request| serve_dashboard(dashboard.clone(), request);

    let cors = cors_layer(&state.config.cors_origins);

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api", api_routes)
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// Unknown API paths get a JSON 404 instead of the dashboard shell
async fn api_not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

fn is_api_path(path: &str) -> bool {
    path == "/api" || path.starts_with("/api/")
}

/// Static files, with `index.html` for anything else outside `/api`.
///
/// `/api/` never reaches the nested fallback, so it is caught here.
async fn serve_dashboard(dashboard: ServeDir<ServeFile>, request: Request) -> Response {
    let path = request.uri().path();
    if is_api_path(path) {
        return ApiError::NotFound(path.to_string()).into_response();
    }

    let result: Result<_, Infallible> = dashboard.oneshot(request).await;
    match result {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET])
        .allow_headers(Any)
}

/// Start the server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    if !config.static_dir.join("index.html").exists() {
        tracing::warn!(
            "No index.html in {:?}; dashboard routes will return 404 until the UI is built",
            config.static_dir
        );
    }

    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Pulseboard listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Pulseboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UpstreamConfig;
    use crate::upstream::UpstreamProbe;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    const INDEX_HTML: &str = "<!DOCTYPE html><html><body>pulseboard-shell</body></html>";

    fn create_test_app() -> (Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log('pulseboard')").unwrap();

        let config = ServerConfig {
            static_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        let upstream = UpstreamProbe::new(&UpstreamConfig::default()).unwrap();

        let router = build_router(AppState::new(config, upstream));
        (router, dir)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _dir) = create_test_app();

        let (status, body) = get(app, "/api/health").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app();

        let (status, _) = get(app, "/api/health/live").await;

        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready_without_upstream() {
        let (app, _dir) = create_test_app();

        let (status, body) = get(app, "/api/health/ready").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ready");
        assert_eq!(json["upstream"], "unconfigured");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_unknown_api_path() {
        let (app, _dir) = create_test_app();

        let (status, body) = get(app, "/api/analytics").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert_eq!(json["error"]["message"], "Not found: /api/analytics");
        assert!(json["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_api_root_is_not_the_shell() {
        for uri in ["/api", "/api/", "/api/health/"] {
            let (app, _dir) = create_test_app();

            let (status, body) = get(app, uri).await;

            assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
            assert!(!body.contains("pulseboard-shell"), "{}", uri);
            let json: serde_json::Value = serde_json::from_str(&body).unwrap();
            assert_eq!(json["error"]["code"], "NOT_FOUND", "{}", uri);
        }
    }

    #[test]
    fn test_is_api_path() {
        assert!(is_api_path("/api"));
        assert!(is_api_path("/api/"));
        assert!(is_api_path("/api/analytics"));
        assert!(!is_api_path("/apiary"));
        assert!(!is_api_path("/dashboard"));
    }

    #[tokio::test]
    async fn test_dashboard_route_serves_shell() {
        let (app, _dir) = create_test_app();

        let (status, body) = get(app, "/dashboard").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("pulseboard-shell"));
    }

    #[tokio::test]
    async fn test_unknown_page_serves_shell() {
        let (app, _dir) = create_test_app();

        let (status, body) = get(app, "/no/such/page").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("pulseboard-shell"));
    }

    #[tokio::test]
    async fn test_static_asset() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/app.js").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
        assert!(content_type.to_str().unwrap().contains("javascript"));
    }

    #[test]
    fn test_cors_layer_skips_invalid_origins() {
        // Construction must not panic on a malformed origin
        let _ = cors_layer(&["http://localhost:8080".to_string(), "bad\norigin".to_string()]);
    }
}
