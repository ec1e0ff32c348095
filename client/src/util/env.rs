//! Environment configuration snapshot.
//!
//! DESIGN
//! ======
//! The server serializes a fixed set of variables into the page as a
//! read-only global (`window.ENV`) at render time; the hydrated client reads
//! that snapshot back. Under `ssr` the snapshot comes straight from process
//! env so server-rendered output matches what the browser will see.

#[cfg(test)]
#[path = "env_test.rs"]
mod env_test;

use serde::{Deserialize, Serialize};

/// Name of the injected global holding the snapshot.
pub const ENV_GLOBAL: &str = "ENV";

/// Read-only environment snapshot exposed to client code.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct EnvConfig {
    pub api_url: String,
    pub api_staging_url: String,
    pub cdn_url: String,
    pub blog_url: String,
    pub selfhosted: bool,
    pub staging: bool,
}

impl EnvConfig {
    /// Base URL for analytics API calls, honoring the staging flag.
    pub fn api_base(&self) -> &str {
        if self.staging && !self.api_staging_url.is_empty() {
            &self.api_staging_url
        } else {
            &self.api_url
        }
    }

    /// Parse a snapshot from its serialized JSON form.
    pub fn from_json(value: &serde_json::Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    /// Build the snapshot from process environment variables.
    #[cfg(feature = "ssr")]
    pub fn from_env() -> Self {
        let flag = |name: &str| {
            std::env::var(name).is_ok_and(|v| v == "true" || v == "1")
        };
        Self {
            api_url: std::env::var("API_URL").unwrap_or_default(),
            api_staging_url: std::env::var("API_STAGING_URL").unwrap_or_default(),
            cdn_url: std::env::var("CDN_URL").unwrap_or_default(),
            blog_url: std::env::var("BLOG_URL").unwrap_or_default(),
            selfhosted: flag("SELFHOSTED"),
            staging: flag("STAGING"),
        }
    }

    /// Inline `<script>` body that installs the snapshot as `window.ENV`.
    pub fn inject_script(&self) -> String {
        let json = serde_json::to_string(self).unwrap_or_else(|_| "{}".to_owned());
        format!("window.{ENV_GLOBAL} = {json};")
    }
}

/// Load the snapshot for the current execution environment.
pub fn load() -> EnvConfig {
    #[cfg(feature = "hydrate")]
    {
        read_window_env().unwrap_or_default()
    }
    #[cfg(all(not(feature = "hydrate"), feature = "ssr"))]
    {
        EnvConfig::from_env()
    }
    #[cfg(all(not(feature = "hydrate"), not(feature = "ssr")))]
    {
        EnvConfig::default()
    }
}

#[cfg(feature = "hydrate")]
fn read_window_env() -> Option<EnvConfig> {
    let global = js_sys::global();
    let raw = js_sys::Reflect::get(&global, &wasm_bindgen::JsValue::from_str(ENV_GLOBAL)).ok()?;
    if raw.is_undefined() || raw.is_null() {
        return None;
    }
    let json = js_sys::JSON::stringify(&raw).ok()?;
    let json: String = json.into();
    serde_json::from_str(&json).ok()
}
