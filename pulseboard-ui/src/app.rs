//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::pages::{Dashboard, Login, NotFound};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Session is read from storage here, once, and shared through context
    provide_global_state();

    view! {
        <Router>
            <main class="min-h-screen bg-gray-50 text-gray-900">
                <Routes>
                    <Route path="/" view=|| view! { <Redirect path="/dashboard" /> } />
                    <Route path="/dashboard" view=Dashboard />
                    <Route path="/login" view=Login />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}
