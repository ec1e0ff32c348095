//! Payment-processor script orchestration.
//!
//! DESIGN
//! ======
//! The vendor library (Paddle) arrives via an externally hosted script that
//! is loaded lazily once a session is authenticated. Load completion has no
//! callback we control, so the shell polls for the vendor global on a short
//! cancellable interval and performs one-time setup when it appears. The
//! phase machine below is pure; the shell drives it from a `gloo_timers`
//! interval bound to its own lifetime. Self-hosted deployments never reach
//! `Ready`: payment features are unavailable there and polling is abandoned.

#[cfg(test)]
#[path = "paddle_test.rs"]
mod paddle_test;

use crate::state::ui::UiState;

/// Externally hosted vendor script.
pub const PADDLE_JS_URL: &str = "https://cdn.paddle.com/paddle/paddle.js";

/// Vendor account identifier passed to one-time setup.
pub const PADDLE_VENDOR_ID: u32 = 139_393;

/// Poll cadence while waiting for the vendor global to appear.
pub const POLL_INTERVAL_MS: u32 = 200;

/// Name of the global object installed by the vendor script.
pub const PADDLE_GLOBAL: &str = "Paddle";

/// Lifecycle of the vendor integration for one session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaddlePhase {
    #[default]
    Idle,
    ScriptRequested,
    Polling,
    /// One-time setup done; terminal.
    Ready,
    /// Self-hosted deployment; terminal, setup never runs.
    Unavailable,
}

/// What the polling driver should do on a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollOutcome {
    /// Vendor global not there yet; keep the interval running.
    KeepPolling,
    /// Vendor global appeared; run setup and cancel the interval.
    Setup,
    /// Payment features unavailable; cancel the interval without setup.
    Abandon,
}

/// Whether the orchestration should start at all. Idempotent: an already
/// loaded session or an unauthenticated one is a no-op.
pub fn should_start(phase: PaddlePhase, authenticated: bool, paddle_loaded: bool) -> bool {
    phase == PaddlePhase::Idle && authenticated && !paddle_loaded
}

/// Decide the next action for one poll tick.
pub fn poll_step(selfhosted: bool, handle_present: bool) -> PollOutcome {
    if selfhosted {
        PollOutcome::Abandon
    } else if handle_present {
        PollOutcome::Setup
    } else {
        PollOutcome::KeepPolling
    }
}

/// Phase after applying a poll outcome.
pub fn apply_outcome(outcome: PollOutcome) -> PaddlePhase {
    match outcome {
        PollOutcome::KeepPolling => PaddlePhase::Polling,
        PollOutcome::Setup => PaddlePhase::Ready,
        PollOutcome::Abandon => PaddlePhase::Unavailable,
    }
}

/// Inject the vendor `<script>` tag. Fire-and-forget: a load failure is not
/// observed here, it simply means the poll never finds the global.
pub fn request_script() {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(head) = document.head() else {
            return;
        };
        match document.create_element("script") {
            Ok(el) => {
                let _ = el.set_attribute("src", PADDLE_JS_URL);
                let _ = el.set_attribute("async", "");
                if head.append_child(&el).is_err() {
                    log::warn!("failed to attach payment script tag");
                }
            }
            Err(_) => log::warn!("failed to create payment script tag"),
        }
    }
}

/// Whether the vendor global has appeared on `window`.
pub fn handle_present() -> bool {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Reflect::get(&js_sys::global(), &wasm_bindgen::JsValue::from_str(PADDLE_GLOBAL))
            .map(|v| !v.is_undefined() && !v.is_null())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// One-time vendor setup: register the vendor id and an event callback that
/// forwards every vendor event into `ui.paddle_last_event`.
#[cfg(feature = "hydrate")]
pub fn setup(ui: leptos::prelude::RwSignal<UiState>) {
    use leptos::prelude::Update;
    use wasm_bindgen::prelude::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    let global = js_sys::global();
    let Ok(paddle) = js_sys::Reflect::get(&global, &JsValue::from_str(PADDLE_GLOBAL)) else {
        return;
    };
    let Ok(setup_fn) = js_sys::Reflect::get(&paddle, &JsValue::from_str("Setup")) else {
        return;
    };
    let setup_fn: js_sys::Function = match setup_fn.dyn_into() {
        Ok(f) => f,
        Err(_) => {
            log::warn!("payment library global has no Setup function");
            return;
        }
    };

    let callback = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
        let value = js_sys::JSON::stringify(&event)
            .ok()
            .and_then(|s| serde_json::from_str::<serde_json::Value>(&String::from(s)).ok())
            .unwrap_or(serde_json::Value::Null);
        ui.update(|u| u.set_paddle_last_event(value));
    });

    let options = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &options,
        &JsValue::from_str("vendor"),
        &JsValue::from_f64(f64::from(PADDLE_VENDOR_ID)),
    );
    let _ = js_sys::Reflect::set(
        &options,
        &JsValue::from_str("eventCallback"),
        callback.as_ref().unchecked_ref(),
    );
    // The callback lives for the rest of the session.
    callback.forget();

    if setup_fn.call1(&paddle, &options).is_err() {
        log::warn!("payment library setup call failed");
    }
}

#[cfg(not(feature = "hydrate"))]
pub fn setup(_ui: leptos::prelude::RwSignal<UiState>) {}
