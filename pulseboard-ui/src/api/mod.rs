//! API Access
//!
//! HTTP client for the analytics endpoint and the payload types it returns.

pub mod client;
pub mod types;

pub use client::{fetch_analytics, get_api_base};
pub use types::AnalyticsPayload;
