//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page route falls through to the Leptos stream renderer, which gets
//! the incoming request so locale and theme can be detected per visitor.
//! Static assets are served from the compiled site root and the whole stack
//! sits behind compression, tracing, and a fixed set of security headers.

use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::Response;
use axum::routing::get;
use client::app::{BootContext, shell};
use client::util::env::EnvConfig;
use leptos::prelude::LeptosOptions;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::detect;

#[derive(Clone)]
pub struct AppState {
    pub leptos_options: LeptosOptions,
    pub env: EnvConfig,
}

/// Full application router: health probe, static assets, SSR fallback.
pub fn app(state: AppState) -> Router {
    let site_root = PathBuf::from(state.leptos_options.site_root.as_ref());

    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback(get(render_app))
        .layer(axum::middleware::map_response(security_headers))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Render one page. Locale and theme come from the request headers so the
/// served HTML needs no client-side correction on first paint.
async fn render_app(State(state): State<AppState>, req: Request<Body>) -> Response {
    let boot = BootContext {
        locale: detect::detect_language(req.headers()),
        theme: detect::detect_theme(req.headers()),
        env: state.env.clone(),
    };

    let options = state.leptos_options.clone();
    let handler = leptos_axum::render_app_to_stream(move || shell(options.clone(), &boot));
    handler(req).await
}

async fn security_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        header::X_XSS_PROTECTION,
        HeaderValue::from_static("1; mode=block"),
    );
    headers.insert(
        "permissions-policy",
        HeaderValue::from_static("interest-cohort=()"),
    );
    response
}
