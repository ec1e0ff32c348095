//! Top navigation chrome.
//!
//! Hidden on the landing page; elsewhere shows auth-aware navigation, the
//! theme toggle, and the logout action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::ui::{Theme, UiState};
use crate::util::dark_mode;
use crate::util::page_meta::SITE_NAME;
use crate::util::tokens;

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let authenticated = move || auth.get().authenticated;

    let on_logout = move |_| {
        // Invalidate server-side before the refresh token is gone locally.
        #[cfg(feature = "hydrate")]
        if let Some(refresh) = tokens::get_refresh_token() {
            leptos::task::spawn_local(async move {
                crate::net::api::logout(&refresh).await;
            });
        }
        tokens::clear_session_tokens();
        auth.update(AuthState::logout);
        navigate("/", NavigateOptions::default());
    };

    let on_theme_toggle = move |_| {
        let next = dark_mode::toggle(ui.get().theme);
        ui.update(|u| u.set_theme(next));
    };
    let theme_label = move || match ui.get().theme {
        Theme::Light => "Dark mode",
        Theme::Dark => "Light mode",
    };

    view! {
        <header class="site-header">
            <A href="/" attr:class="site-header__brand">{SITE_NAME}</A>
            <nav class="site-header__nav">
                <Show
                    when=authenticated
                    fallback=|| {
                        view! {
                            <A href="/signin" attr:class="site-header__link">"Sign in"</A>
                        }
                    }
                >
                    <A href="/dashboard" attr:class="site-header__link">"Dashboard"</A>
                    <button class="site-header__link" on:click=on_logout.clone()>
                        "Log out"
                    </button>
                </Show>
                <button class="site-header__theme" on:click=on_theme_toggle>
                    {theme_label}
                </button>
            </nav>
        </header>
    }
}
