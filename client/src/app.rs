//! Root application component, HTML shell, and the session-bootstrap
//! sequence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders [`shell`] once per request with detected locale/theme
//! and the injected environment snapshot; [`App`] provides the global state
//! contexts and routing; [`AppShell`] runs the cross-cutting effects: the
//! stored-session bootstrap, the payment-script orchestration, and the
//! document-title computation, and composes header/outlet/footer chrome.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::{ParamSegment, StaticSegment};

use crate::components::alert_host::AlertHost;
use crate::components::footer::Footer;
use crate::components::guarded::Guarded;
use crate::components::header::Header;
use crate::pages::dashboard::DashboardPage;
use crate::pages::main_page::MainPage;
use crate::pages::project::ProjectPage;
use crate::pages::signin::SigninPage;
use crate::state::alerts::AlertsState;
use crate::state::auth::AuthState;
use crate::state::errors::ErrorsState;
use crate::state::ui::{Theme, UiState};
use crate::util::auth::GuardKind;
use crate::util::env::EnvConfig;
use crate::util::page_meta;
use crate::util::tokens;

/// Server-computed parameters for one request.
#[derive(Clone, Debug, Default)]
pub struct BootContext {
    /// BCP 47 language tag for the `<html lang>` attribute.
    pub locale: String,
    /// Theme rendered into the document class to avoid a flash on load.
    pub theme: Theme,
    /// Environment snapshot injected as the `window.ENV` global.
    pub env: EnvConfig,
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions, boot: &BootContext) -> impl IntoView + use<> {
    view! {
        <!DOCTYPE html>
        <html lang=boot.locale.clone() class=boot.theme.html_class()>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Privacy-friendly web analytics"/>
                <script inner_html=boot.env.inject_script()></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Whether the shell may render chrome yet. While a stored token pair is
/// being verified, rendering is withheld to avoid a flash of
/// unauthenticated content.
fn chrome_visible(has_tokens: bool, loading: bool) -> bool {
    !(has_tokens && loading)
}

/// The header is hidden on the marketing landing page.
fn show_header(path: &str) -> bool {
    path != "/"
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let errors = RwSignal::new(ErrorsState::default());
    let alerts = RwSignal::new(AlertsState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(errors);
    provide_context(alerts);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/glimpse.css"/>
        <Title text=page_meta::SITE_NAME/>

        <Router>
            <AppShell/>
        </Router>
    }
}

/// Shell chrome plus the cross-cutting effects. Lives inside the router so
/// it can observe the current location.
#[component]
fn AppShell() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    // Token presence is only knowable in the browser; the gate starts open
    // so server-rendered output matches an anonymous first paint.
    let has_tokens = RwSignal::new(false);

    // One-time client init: probe stored tokens and apply the persisted
    // theme preference.
    Effect::new(move || {
        has_tokens.set(tokens::has_session_tokens());
        let theme = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(theme);
        ui.update(|u| u.set_theme(theme));
    });

    install_session_bootstrap(auth);
    install_paddle_orchestration(auth, ui);

    // Document title tracks the path unless the page owns its title.
    Effect::new(move || {
        let path = location.pathname.get();
        if page_meta::title_is_locked(&path) {
            return;
        }
        let title = page_meta::title_for_path(&path);
        #[cfg(feature = "hydrate")]
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(&title);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = title;
    });

    let minimal_footer = Memo::new(move |_| page_meta::uses_minimal_footer(&location.pathname.get()));
    let authenticated = Signal::derive(move || auth.get().authenticated);
    let header_visible = Memo::new(move |_| show_header(&location.pathname.get()));

    view! {
        <Show when=move || chrome_visible(has_tokens.get(), auth.get().loading)>
            <Show when=move || header_visible.get()>
                <Header/>
            </Show>
            <main class="app-outlet">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=MainPage/>
                    <Route
                        path=StaticSegment("signin")
                        view=|| {
                            view! {
                                <Guarded kind=GuardKind::NotAuthenticated>
                                    <SigninPage/>
                                </Guarded>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| {
                            view! {
                                <Guarded kind=GuardKind::Authenticated>
                                    <DashboardPage/>
                                </Guarded>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("projects"), ParamSegment("id"))
                        view=ProjectPage
                    />
                </Routes>
            </main>
            <Footer minimal=minimal_footer authenticated=authenticated/>
            <AlertHost/>
        </Show>
    }
}

/// Verify a stored token pair against the identity endpoint, once per
/// transition of the `authenticated` flag.
///
/// Success marks the session authenticated; any failure clears both
/// credentials and resets to logged-out. No retry: a later flag change
/// (explicit sign-in) re-evaluates the preconditions naturally.
fn install_session_bootstrap(auth: RwSignal<AuthState>) {
    let authenticated = Memo::new(move |_| auth.get().authenticated);

    Effect::new(move || {
        if authenticated.get() {
            return;
        }
        if !tokens::has_session_tokens() {
            // No credentials: the session is definitively logged out.
            auth.update(AuthState::finish_loading);
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::auth_me().await {
                Ok(user) => {
                    let _ = auth.try_update(|a| {
                        a.login_successful(user);
                        a.finish_loading();
                    });
                }
                Err(e) => {
                    log::warn!("session bootstrap failed: {e}");
                    let refresh = tokens::get_refresh_token();
                    tokens::clear_session_tokens();
                    if let Some(refresh) = refresh {
                        crate::net::api::logout(&refresh).await;
                    }
                    let _ = auth.try_update(AuthState::logout);
                }
            }
        });
    });
}

/// Lazily load the payment-processor script once authenticated, poll for
/// its global handle, and perform one-time setup. See `util::paddle` for
/// the phase machine.
fn install_paddle_orchestration(auth: RwSignal<AuthState>, ui: RwSignal<UiState>) {
    use crate::util::paddle::{self, PaddlePhase};

    let phase = StoredValue::new(PaddlePhase::Idle);

    #[cfg(feature = "hydrate")]
    let timer = std::rc::Rc::new(std::cell::RefCell::new(
        None::<gloo_timers::callback::Interval>,
    ));

    #[cfg(feature = "hydrate")]
    {
        let timer = std::rc::Rc::clone(&timer);
        on_cleanup(move || {
            timer.borrow_mut().take();
        });
    }

    Effect::new(move || {
        let session = auth.get();
        let flags = ui.get();
        if !paddle::should_start(phase.get_value(), session.authenticated, flags.paddle_loaded) {
            return;
        }

        phase.set_value(PaddlePhase::ScriptRequested);
        paddle::request_script();

        #[cfg(feature = "hydrate")]
        {
            use crate::util::paddle::PollOutcome;

            let selfhosted = crate::util::env::load().selfhosted;
            let slot = std::rc::Rc::clone(&timer);
            let slot_in_tick = std::rc::Rc::clone(&timer);
            let tick = gloo_timers::callback::Interval::new(paddle::POLL_INTERVAL_MS, move || {
                match paddle::poll_step(selfhosted, paddle::handle_present()) {
                    PollOutcome::KeepPolling => {}
                    PollOutcome::Setup => {
                        paddle::setup(ui);
                        let _ = ui.try_update(UiState::set_paddle_loaded);
                        phase.set_value(PaddlePhase::Ready);
                        slot_in_tick.borrow_mut().take();
                    }
                    PollOutcome::Abandon => {
                        phase.set_value(PaddlePhase::Unavailable);
                        slot_in_tick.borrow_mut().take();
                    }
                }
            });
            *slot.borrow_mut() = Some(tick);
            phase.set_value(PaddlePhase::Polling);
        }
    });
}
