//! Login page with Google OAuth redirect button.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Login page — clicking the button navigates to the Google OAuth endpoint.
/// Redirects to the dashboard if a session already exists.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.is_authenticated() {
            navigate("/", NavigateOptions::default());
        }
    });

    view! {
        <div class="login-page">
            <h1>"Horti"</h1>
            <p>"Track your garden, one plant at a time"</p>
            <a href="/auth/google" class="login-button">
                "Sign in with Google"
            </a>
        </div>
    }
}
