//! 404 Not Found page

use leptos::*;
use leptos_router::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="flex min-h-screen flex-col items-center justify-center p-4 text-center">
            <h1 class="mb-4 text-4xl font-bold">"Page not found"</h1>
            <p class="mb-8 max-w-md text-lg">
                "We couldn't find the page you're looking for. It may have been moved or deleted."
            </p>
            <A
                href="/dashboard"
                class="rounded-md bg-gray-900 px-6 py-2 font-medium text-white hover:bg-gray-700"
            >
                "Go Back to Dashboard"
            </A>
        </div>
    }
}
