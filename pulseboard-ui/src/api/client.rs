//! HTTP API Client
//!
//! Fetches the analytics document from the external analytics API.

use gloo_net::http::Request;

use crate::api::types::AnalyticsPayload;
use crate::state::loader::{response_outcome, LoadError};
use crate::state::session::{BrowserStorage, SessionStore};

/// Local storage key holding a runtime override of the API base URL
pub const API_URL_KEY: &str = "pulseboard_api_url";

/// Base URL baked in at build time; empty means same origin
pub const DEFAULT_API_BASE: &str = match option_env!("PULSEBOARD_API_BASE_URL") {
    Some(url) => url,
    None => "",
};

/// Get the API base URL from local storage or use the build-time default.
///
/// Read on every request so an override takes effect on the next page load.
pub fn get_api_base() -> String {
    let url = BrowserStorage
        .get(API_URL_KEY)
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Issue the single analytics GET.
///
/// `Ok(None)` means the endpoint answered with a JSON `null` body.
pub async fn fetch_analytics(url: String) -> Result<Option<AnalyticsPayload>, LoadError> {
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| LoadError::Network(describe(e)))?;

    let status = response.status();
    let body = if (200..=299).contains(&status) {
        response
            .text()
            .await
            .map_err(|e| LoadError::Network(describe(e)))?
    } else {
        String::new()
    };

    response_outcome(status, &body)
}

/// Prefer the browser's own message ("Failed to fetch") over the debug form
fn describe(error: gloo_net::Error) -> String {
    match error {
        gloo_net::Error::JsError(js) => js.message,
        other => other.to_string(),
    }
}
