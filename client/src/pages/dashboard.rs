//! Dashboard page: the authenticated landing route.
//!
//! Project inventory and stats widgets live in their own modules; this page
//! provides the authenticated frame around them. Route-level guarding is
//! done in the router via `Guarded`, so by the time this renders the
//! session is verified.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let greeting = move || {
        let state = auth.get();
        let who = state
            .user
            .and_then(|u| u.name)
            .unwrap_or_else(|| "there".to_owned());
        format!("Hello, {who}")
    };

    view! {
        <div class="dashboard">
            <h1>{greeting}</h1>
            <p class="dashboard__hint">
                "Open one of your projects to see traffic, live visitors and more."
            </p>
            <A href="/projects/demo" attr:class="dashboard__project-link">
                "Demo project"
            </A>
        </div>
    }
}
