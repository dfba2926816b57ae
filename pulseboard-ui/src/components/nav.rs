//! Navigation Component
//!
//! Sidebar navigation shell with a mobile open/close toggle.

use leptos::*;
use leptos_router::{use_navigate, A};

use crate::state::global::GlobalState;
use crate::state::sidebar::SidebarState;

const LINK_CLASS: &str = "flex w-full items-center gap-2 rounded-md px-3 py-2 font-medium \
                          hover:bg-gray-200 dark:hover:bg-gray-800";

/// Sidebar entries as (label, client route). Only Dashboard has a page so far.
const SIDEBAR_LINKS: [(&str, Option<&str>); 4] = [
    ("Dashboard", Some("/dashboard")),
    ("Analytics", None),
    ("Reports", None),
    ("Settings", None),
];

/// Sidebar with navigation links and log out
#[component]
pub fn Sidebar(sidebar: RwSignal<SidebarState>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let on_logout = move |_| {
        state.sign_out();
        navigate("/", Default::default());
    };

    view! {
        // Hamburger menu for mobile
        <div class="absolute top-4 left-4 z-50 md:hidden">
            <button
                on:click=move |_| sidebar.update(SidebarState::toggle)
                class="rounded-md bg-gray-200 p-2 dark:bg-gray-800"
                aria-label=move || if sidebar.get().is_open() { "Close menu" } else { "Open menu" }
            >
                <span class="block h-6 w-6 text-center text-gray-700 dark:text-gray-300">
                    {move || if sidebar.get().is_open() { "✕" } else { "☰" }}
                </span>
            </button>
        </div>

        <div class=move || format!(
            "fixed inset-y-0 left-0 z-40 w-64 transform border-r bg-gray-100 p-4 \
             dark:border-gray-800 dark:bg-gray-900 {} md:relative md:flex md:translate-x-0 md:flex-col",
            sidebar.get().panel_class()
        )>
            <nav class="space-y-2">
                {SIDEBAR_LINKS
                    .into_iter()
                    .map(|(label, route)| view! { <SidebarLink label=label route=route /> })
                    .collect_view()}
                <button
                    on:click=on_logout
                    class=format!("{} text-gray-500 dark:text-gray-400", LINK_CLASS)
                >
                    "Log Out"
                </button>
            </nav>
        </div>
    }
}

/// Routed entries navigate in-app; the rest are inert placeholders
#[component]
fn SidebarLink(label: &'static str, route: Option<&'static str>) -> impl IntoView {
    match route {
        Some(route) => view! {
            <A href=route class=format!("{} text-gray-900 dark:text-gray-100", LINK_CLASS)>
                {label}
            </A>
        }
        .into_view(),
        None => view! {
            <a href="#" class=format!("{} text-gray-500 dark:text-gray-400", LINK_CLASS)>
                {label}
            </a>
        }
        .into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_link_is_client_routed() {
        let routed: Vec<_> = SIDEBAR_LINKS
            .iter()
            .filter_map(|(label, route)| route.map(|route| (*label, route)))
            .collect();

        assert_eq!(routed, vec![("Dashboard", "/dashboard")]);
    }
}
