//! Pulseboard Dashboard
//!
//! Analytics dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - API request volume (line chart) and server load (bar chart)
//! - Recent alerts table
//! - Login-flag gate with redirect to `/login`
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It reads one JSON document from `<base>/api/analytics`; the
//! base URL is baked in from `PULSEBOARD_API_BASE_URL` at build time and can
//! be overridden through local storage.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
