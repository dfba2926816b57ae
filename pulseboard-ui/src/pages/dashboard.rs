//! Dashboard Page
//!
//! Analytics overview: request volume, server load and recent alerts.

use leptos::*;
use leptos_router::use_navigate;

use crate::api::{self, AnalyticsPayload};
use crate::components::{AlertTable, Chart, ChartKind, DashboardSkeleton, Sidebar};
use crate::state::global::GlobalState;
use crate::state::loader::{self, LoadState, Mounted};
use crate::state::sidebar::SidebarState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let sidebar = create_rw_signal(SidebarState::default());
    let load = create_rw_signal(LoadState::Loading);

    // Runs once per mount: nothing inside is tracked
    create_effect(move |_| {
        let session = state.session.get_untracked();
        let api_base = api::get_api_base();
        let navigate = navigate.clone();

        spawn_local(async move {
            match loader::run(&session, &api_base, api::fetch_analytics).await {
                Mounted::Redirected(route) => navigate(route, Default::default()),
                Mounted::Settled(next) => {
                    if let LoadState::Error(message) = &next {
                        web_sys::console::error_1(
                            &format!("Failed to load analytics: {}", message).into(),
                        );
                    }
                    // Dropped if the page was torn down while the request was outstanding
                    let _ = load.try_set(next);
                }
            }
        });
    });

    view! {
        <div class="relative flex h-screen bg-gray-50">
            <Sidebar sidebar=sidebar />

            <div class="flex-1 overflow-y-auto p-6">
                {move || match load.get() {
                    LoadState::Loading => view! { <DashboardSkeleton /> }.into_view(),
                    LoadState::Loaded(payload) => view! { <Overview payload=payload /> }.into_view(),
                    failed @ LoadState::Error(_) => view! {
                        <div class="p-6 text-red-500">{failed.status_text()}</div>
                    }.into_view(),
                    empty @ LoadState::Empty => view! {
                        <div class="p-6 text-gray-500">{empty.status_text()}</div>
                    }.into_view(),
                }}
            </div>
        </div>
    }
}

/// Charts and alert table for a loaded payload
#[component]
fn Overview(payload: AnalyticsPayload) -> impl IntoView {
    let AnalyticsPayload {
        api_requests_data,
        server_load_data,
        recent_alerts_data,
    } = payload;

    view! {
        <h1 class="mb-6 text-2xl font-bold">"Dashboard Overview"</h1>

        <div class="mb-8 grid grid-cols-1 gap-4 md:grid-cols-2">
            <section class="rounded-lg bg-white p-4 shadow-sm">
                <Chart
                    title="API Requests over last 24h"
                    data=api_requests_data
                    kind=ChartKind::Line
                />
            </section>
            <section class="rounded-lg bg-white p-4 shadow-sm">
                <Chart
                    title="Server Load"
                    data=server_load_data
                    kind=ChartKind::Bar
                />
            </section>
        </div>

        <section class="rounded-lg bg-white p-4 shadow-sm">
            <h2 class="mb-4 text-lg font-bold">"Recent Alerts"</h2>
            <AlertTable alerts=recent_alerts_data />
        </section>
    }
}
