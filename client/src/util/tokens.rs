//! Token store: the access/refresh credential pair in `localStorage`.
//!
//! DESIGN
//! ======
//! The credential pair is owned by persistent client storage and only
//! touched through these narrow accessors: the session bootstrap reads it,
//! authentication success/failure handlers and explicit logout write it.
//! Outside a browser the getters return `None` and the setters are no-ops.

#[cfg(test)]
#[path = "tokens_test.rs"]
mod tokens_test;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Whether a full credential pair is present in storage.
pub fn has_session_tokens() -> bool {
    get_access_token().is_some() && get_refresh_token().is_some()
}

pub fn get_access_token() -> Option<String> {
    storage_get(ACCESS_TOKEN_KEY)
}

pub fn set_access_token(token: &str) {
    storage_set(ACCESS_TOKEN_KEY, token);
}

pub fn remove_access_token() {
    storage_remove(ACCESS_TOKEN_KEY);
}

pub fn get_refresh_token() -> Option<String> {
    storage_get(REFRESH_TOKEN_KEY)
}

pub fn set_refresh_token(token: &str) {
    storage_set(REFRESH_TOKEN_KEY, token);
}

pub fn remove_refresh_token() {
    storage_remove(REFRESH_TOKEN_KEY);
}

/// Drop both credentials, e.g. after identity verification fails.
pub fn clear_session_tokens() {
    remove_access_token();
    remove_refresh_token();
}

fn storage_get(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;
        storage.get_item(key).ok()?
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

fn storage_set(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

fn storage_remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(key);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
