//! Login Page
//!
//! Stand-in for a real login flow: marks the session as logged in.

use leptos::*;
use leptos_router::use_navigate;

use crate::state::global::GlobalState;

#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let on_continue = move |_| {
        state.sign_in();
        navigate("/dashboard", Default::default());
    };

    view! {
        <div class="flex min-h-screen flex-col items-center justify-center p-4 text-center">
            <h1 class="mb-4 text-4xl font-bold">"Sign in"</h1>
            <p class="mb-8 max-w-md text-lg">"Continue to the analytics dashboard."</p>
            <button
                on:click=on_continue
                class="rounded-md bg-gray-900 px-6 py-2 font-medium text-white hover:bg-gray-700"
            >
                "Continue"
            </button>
        </div>
    }
}
