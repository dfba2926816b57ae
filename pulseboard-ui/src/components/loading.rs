//! Loading Component
//!
//! Skeleton placeholders shown while the analytics request is outstanding.

use leptos::*;

/// Placeholder for the whole dashboard: heading, two charts, alerts table
#[component]
pub fn DashboardSkeleton() -> impl IntoView {
    view! {
        <div class="animate-pulse space-y-4" aria-busy="true">
            <div class="h-8 w-3/4 rounded bg-gray-300" />
            <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                <ChartSkeleton />
                <ChartSkeleton />
            </div>
            <div class="rounded-lg bg-white p-4 shadow-sm">
                <div class="mb-4 h-8 w-1/4 rounded bg-gray-200" />
                <ListSkeleton count=5 />
            </div>
        </div>
    }
}

/// Skeleton loader for chart
#[component]
pub fn ChartSkeleton() -> impl IntoView {
    view! {
        <div class="h-72 rounded-lg bg-gray-300 shadow-sm" />
    }
}

/// Skeleton loader for list items
#[component]
pub fn ListSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            {(0..count).map(|_| view! {
                <div class="h-10 rounded bg-gray-100" />
            }).collect_view()}
        </div>
    }
}
