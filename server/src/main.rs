//! SSR host for the Glimpse web client.
//!
//! Serves the Leptos-rendered application, its static assets, and a health
//! probe. The analytics API itself is an external service; this binary only
//! renders the client and injects per-request boot parameters.

// Deeply nested Leptos view types overflow the default query depth limit.
#![recursion_limit = "256"]

mod config;
mod detect;
mod routes;

use leptos::prelude::get_configuration;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid server configuration");
            std::process::exit(1);
        }
    };

    let conf = get_configuration(None).expect("leptos configuration");
    let state = routes::AppState {
        leptos_options: conf.leptos_options,
        env: config.env.clone(),
    };

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "glimpse web listening");
    axum::serve(listener, app).await.expect("server failed");
}
