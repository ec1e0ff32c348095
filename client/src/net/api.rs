//! REST API calls against the external analytics backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the
//! injected API base URL. Server-side (SSR): stubs returning errors since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` outputs instead of panics. The error
//! shape distinguishes plain server messages (surfaced to users) from
//! structured payloads (logged only) so callers can follow the product's
//! presentation rules.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;

use super::types::{LastPost, LiveVisitor, LoginResponse, TwoFaResponse, User};
#[cfg(feature = "hydrate")]
use crate::util::env;

/// Failure of an API call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The server replied with a plain string message.
    Message(String),
    /// The server replied with a structured (non-string) error body.
    Payload(String),
    /// Non-2xx response without a usable body.
    Status(u16),
    /// Transport-level failure (network down, CORS, malformed JSON).
    Network(String),
}

impl ApiError {
    /// The user-presentable message, if the server sent one.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Message(m) => Some(m),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(m) => write!(f, "{m}"),
            Self::Payload(raw) => write!(f, "api error: {raw}"),
            Self::Status(code) => write!(f, "api error: status {code}"),
            Self::Network(e) => write!(f, "network error: {e}"),
        }
    }
}

/// Build an error from a failed response body, unwrapping a nested
/// `message` field when present, else keeping the raw body.
#[cfg(any(test, feature = "hydrate"))]
fn error_from_body(status: u16, body: Option<serde_json::Value>) -> ApiError {
    match body {
        Some(serde_json::Value::String(message)) => ApiError::Message(message),
        Some(value) => match value.get("message").and_then(serde_json::Value::as_str) {
            Some(message) if !message.is_empty() => ApiError::Message(message.to_owned()),
            _ => ApiError::Payload(value.to_string()),
        },
        None => ApiError::Status(status),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn me_endpoint(base: &str) -> String {
    format!("{base}/user/me")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint(base: &str) -> String {
    format!("{base}/auth/login")
}

#[cfg(any(test, feature = "hydrate"))]
fn two_fa_endpoint(base: &str) -> String {
    format!("{base}/2fa/authenticate")
}

#[cfg(any(test, feature = "hydrate"))]
fn logout_endpoint(base: &str) -> String {
    format!("{base}/auth/logout")
}

#[cfg(any(test, feature = "hydrate"))]
fn live_visitors_endpoint(base: &str, project_id: &str) -> String {
    format!("{base}/log/liveVisitors?pid={project_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn last_post_endpoint(blog_base: &str) -> String {
    format!("{blog_base}/last-post?format=json")
}

#[cfg(feature = "hydrate")]
async fn error_from_response(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.json::<serde_json::Value>().await.ok();
    error_from_body(status, body)
}

/// Verify the stored session against the identity endpoint.
///
/// # Errors
///
/// Any non-2xx response or transport failure is an authentication failure;
/// the caller is expected to clear the credential pair.
pub async fn auth_me() -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let token = crate::util::tokens::get_access_token()
            .ok_or_else(|| ApiError::Message("no access token".to_owned()))?;
        let resp = gloo_net::http::Request::get(&me_endpoint(env::load().api_base()))
            .header("Authorization", &bearer(&token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<User>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Sign in with email and password. A `two_fa_required` response carries no
/// token pair; the caller must follow up with [`submit_2fa`].
///
/// # Errors
///
/// Returns the server's message for rejected credentials, or a transport
/// error.
pub async fn login(
    email: &str,
    password: &str,
    dont_remember: bool,
) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "email": email,
            "password": password,
            "dontRemember": dont_remember,
        });
        let resp = gloo_net::http::Request::post(&login_endpoint(env::load().api_base()))
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, dont_remember);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Submit a two-factor code. The raw code value is sent as-is; the server
/// owns format validation.
///
/// # Errors
///
/// Plain-string rejections surface via [`ApiError::Message`]; other shapes
/// come back as payload/status errors for the caller to log.
pub async fn submit_2fa(code: &str) -> Result<TwoFaResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "twoFactorAuthenticationCode": code });
        let resp = gloo_net::http::Request::post(&two_fa_endpoint(env::load().api_base()))
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<TwoFaResponse>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = code;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Invalidate a refresh token server-side. Fire-and-forget: failures are
/// ignored, the local credential pair is already gone by the time this runs.
pub async fn logout(refresh_token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "refreshToken": refresh_token });
        let request = gloo_net::http::Request::post(&logout_endpoint(env::load().api_base()))
            .json(&payload);
        if let Ok(request) = request {
            let _ = request.send().await;
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = refresh_token;
    }
}

/// Fetch live-session metadata for a project. Password-protected projects
/// pass the password through the dedicated header.
///
/// # Errors
///
/// Returns a transport or server error; the caller logs it without any user
/// surface.
pub async fn live_visitors(
    project_id: &str,
    project_password: Option<&str>,
) -> Result<Vec<LiveVisitor>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = live_visitors_endpoint(env::load().api_base(), project_id);
        let mut request = gloo_net::http::Request::get(&url);
        if let Some(password) = project_password {
            request = request.header("x-password", password);
        }
        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<Vec<LiveVisitor>>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (project_id, project_password);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch the latest blog post for the footer.
///
/// # Errors
///
/// Unwraps the server's nested error message when present, otherwise
/// surfaces the raw error body.
pub async fn last_post() -> Result<LastPost, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&last_post_endpoint(&env::load().blog_url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<LastPost>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}
