//! Per-request locale and theme detection.
//!
//! Runs once per page render: a cookie override wins, then the
//! `Accept-Language` header is matched against the supported locales, then
//! the defaults apply. The detected values go into the HTML shell so the
//! first paint already has the right language attribute and theme class.

#[cfg(test)]
#[path = "detect_test.rs"]
mod detect_test;

use axum::http::HeaderMap;
use axum::http::header::{ACCEPT_LANGUAGE, COOKIE};
use client::state::ui::Theme;

/// Locales with translation resources.
pub const SUPPORTED_LOCALES: [&str; 4] = ["en", "uk", "ru", "de"];

pub const DEFAULT_LOCALE: &str = "en";

/// Cookie set by the language switcher.
pub const LOCALE_COOKIE: &str = "lng";

/// Cookie set by the theme toggle; the client owns the name.
pub const THEME_COOKIE: &str = client::util::dark_mode::STORAGE_KEY;

/// Detect the page locale for a request.
pub fn detect_language(headers: &HeaderMap) -> String {
    if let Some(cookies) = header_str(headers, &COOKIE) {
        if let Some(value) = cookie_value(cookies, LOCALE_COOKIE) {
            if SUPPORTED_LOCALES.contains(&value) {
                return value.to_owned();
            }
        }
    }
    header_str(headers, &ACCEPT_LANGUAGE)
        .and_then(accept_language_locale)
        .unwrap_or_else(|| DEFAULT_LOCALE.to_owned())
}

/// Detect the theme for a request. Light unless the cookie says otherwise.
pub fn detect_theme(headers: &HeaderMap) -> Theme {
    header_str(headers, &COOKIE)
        .and_then(|cookies| cookie_value(cookies, THEME_COOKIE))
        .map(Theme::from_str_or_default)
        .unwrap_or_default()
}

fn header_str<'a>(headers: &'a HeaderMap, name: &axum::http::HeaderName) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Extract a cookie value from a `Cookie` header string.
fn cookie_value<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

/// Best supported locale from an `Accept-Language` header, honoring
/// q-values; ties keep the earlier entry. `q=0` marks a tag as not
/// acceptable and never selects it.
fn accept_language_locale(header: &str) -> Option<String> {
    let mut best: Option<(f32, String)> = None;
    for item in header.split(',') {
        let mut parts = item.trim().split(';');
        let tag = parts.next().unwrap_or_default().trim();
        let primary = tag.split('-').next().unwrap_or_default().to_ascii_lowercase();
        if !SUPPORTED_LOCALES.contains(&primary.as_str()) {
            continue;
        }
        let quality = parts
            .find_map(|p| p.trim().strip_prefix("q="))
            .and_then(|v| v.parse::<f32>().ok())
            .unwrap_or(1.0);
        if quality <= 0.0 {
            continue;
        }
        let replace = best.as_ref().is_none_or(|(bq, _)| quality > *bq);
        if replace {
            best = Some((quality, primary));
        }
    }
    best.map(|(_, locale)| locale)
}
