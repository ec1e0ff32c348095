//! # client
//!
//! Leptos + WASM frontend for the Glimpse analytics dashboard.
//!
//! This crate contains pages, components, application state, the REST API
//! layer, and browser-environment utilities (token storage, environment
//! snapshot, payment-script orchestration). It renders on the server via
//! the `ssr` feature and hydrates in the browser via the `hydrate` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
