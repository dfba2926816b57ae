//! Global Application State
//!
//! Reactive state shared through Leptos context.

use leptos::*;

use crate::state::session::{BrowserStorage, Session};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Current session, restored from storage once at startup
    pub session: RwSignal<Session>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        session: create_rw_signal(Session::restore(&BrowserStorage)),
    };

    provide_context(state);
}

impl GlobalState {
    /// Mark the visitor as logged in and persist the flag
    pub fn sign_in(&self) {
        self.session.set(Session::sign_in(&BrowserStorage));
    }

    /// Forget the login flag
    pub fn sign_out(&self) {
        self.session.set(Session::sign_out(&BrowserStorage));
    }
}
