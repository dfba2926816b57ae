//! Dashboard Data Loader
//!
//! Drives the dashboard from mount to exactly one terminal [`LoadState`]:
//!
//! ```text
//! mount ──(no session)──────────────▶ redirect to /login, no request
//!   │
//!   └─(session)─▶ Loading ──GET /api/analytics──▶ Error | Empty | Loaded
//! ```
//!
//! Nothing here touches the DOM or the network directly; the fetch is passed
//! in, which keeps the whole lifecycle testable off the browser.

use serde_json::Value;
use std::future::Future;
use thiserror::Error;

use crate::api::types::AnalyticsPayload;
use crate::state::session::Session;

/// Path of the analytics endpoint relative to the API base URL
pub const ANALYTICS_PATH: &str = "/api/analytics";

/// Where an anonymous visitor is sent
pub const LOGIN_ROUTE: &str = "/login";

/// Visible state of the dashboard page
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    /// Request outstanding; the skeleton is shown
    #[default]
    Loading,
    /// Request failed; carries the failure description
    Error(String),
    /// Request succeeded but the body held no data (`null`, `false`, `0`, `""`)
    Empty,
    Loaded(AnalyticsPayload),
}

impl LoadState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LoadState::Loading)
    }

    /// Single line shown instead of the dashboard, if any
    pub fn status_text(&self) -> Option<String> {
        match self {
            LoadState::Error(message) => Some(format!("Failed to load data: {}", message)),
            LoadState::Empty => Some("No data available.".to_string()),
            LoadState::Loading | LoadState::Loaded(_) => None,
        }
    }
}

/// Why the analytics request failed
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    /// The request never produced a response
    #[error("{0}")]
    Network(String),

    /// The endpoint answered outside 200..=299
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    /// The body was not an analytics document
    #[error("{0}")]
    Parse(String),
}

/// First step taken when the dashboard mounts
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MountAction {
    Redirect(&'static str),
    Fetch { url: String },
}

/// How a mount ended
#[derive(Clone, Debug, PartialEq)]
pub enum Mounted {
    Redirected(&'static str),
    Settled(LoadState),
}

/// `<api_base>/api/analytics`
pub fn analytics_url(api_base: &str) -> String {
    format!("{}{}", api_base.trim_end_matches('/'), ANALYTICS_PATH)
}

/// Decide between redirecting and fetching
pub fn on_mount(session: &Session, api_base: &str) -> MountAction {
    if session.is_authenticated() {
        MountAction::Fetch {
            url: analytics_url(api_base),
        }
    } else {
        MountAction::Redirect(LOGIN_ROUTE)
    }
}

/// Interpret a completed HTTP exchange.
///
/// The body is only looked at for 2xx statuses. A falsy JSON body (`null`,
/// `false`, `0`, `""`) yields `Ok(None)`. Any other JSON value that is not an
/// object loads as a payload with no series.
pub fn response_outcome(status: u16, body: &str) -> Result<Option<AnalyticsPayload>, LoadError> {
    if !(200..=299).contains(&status) {
        return Err(LoadError::Http { status });
    }

    let value: Value = serde_json::from_str(body).map_err(|e| LoadError::Parse(e.to_string()))?;

    match value {
        value if is_falsy(&value) => Ok(None),
        Value::Object(_) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| LoadError::Parse(e.to_string())),
        _ => Ok(Some(AnalyticsPayload::default())),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map_or(false, |n| n == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Map a fetch outcome to its terminal state
pub fn settle(outcome: Result<Option<AnalyticsPayload>, LoadError>) -> LoadState {
    match outcome {
        Ok(Some(payload)) => LoadState::Loaded(payload),
        Ok(None) => LoadState::Empty,
        Err(e) => LoadState::Error(e.to_string()),
    }
}

/// Run one mount: redirect, or issue `fetch` once and settle its result
pub async fn run<F, Fut>(session: &Session, api_base: &str, fetch: F) -> Mounted
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<Option<AnalyticsPayload>, LoadError>>,
{
    match on_mount(session, api_base) {
        MountAction::Redirect(route) => Mounted::Redirected(route),
        MountAction::Fetch { url } => Mounted::Settled(settle(fetch(url).await)),
    }
}
