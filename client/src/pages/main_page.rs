//! Marketing landing page.
//!
//! Content here is intentionally thin; the landing copy lives with the
//! marketing team and changes independently of the app shell.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::util::page_meta::SITE_NAME;

#[component]
pub fn MainPage() -> impl IntoView {
    view! {
        <div class="landing">
            <section class="landing__hero">
                <h1>{format!("{SITE_NAME} Analytics")}</h1>
                <p class="landing__tagline">
                    "Privacy-friendly, cookie-less web analytics. \
                     See what matters without tracking your visitors."
                </p>
                <A href="/signin" attr:class="landing__cta">"Get started"</A>
            </section>
        </div>
    }
}
