//! Dark mode initialization and toggle.
//!
//! Reads the user's preference from `localStorage` and applies the `dark`
//! class to the `<html>` element. Toggle writes the preference back to both
//! `localStorage` and a same-named cookie; the server reads the cookie and
//! renders the initial class, so hydration does not flash the wrong theme.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::ui::Theme;

/// Storage key and cookie name carrying the theme preference.
pub const STORAGE_KEY: &str = "glimpse_theme";

/// One year, in seconds.
const COOKIE_MAX_AGE: u32 = 31_536_000;

/// Cookie string persisting a theme preference for server-side rendering.
pub fn theme_cookie(theme: Theme) -> String {
    format!(
        "{STORAGE_KEY}={}; path=/; max-age={COOKIE_MAX_AGE}; samesite=lax",
        theme.as_str()
    )
}

/// Read the theme preference from localStorage, falling back to the system
/// preference when nothing is stored.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return Theme::Light,
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                return Theme::from_str_or_default(&val);
            }
        }

        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Light
    }
}

/// Apply or remove the `dark` class on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let class_list = el.class_list();
                match theme {
                    Theme::Dark => {
                        let _ = class_list.add_1("dark");
                    }
                    Theme::Light => {
                        let _ = class_list.remove_1("dark");
                    }
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Toggle the theme and persist the new preference to localStorage and the
/// cookie the server renders from.
pub fn toggle(current: Theme) -> Theme {
    let next = match current {
        Theme::Light => Theme::Dark,
        Theme::Dark => Theme::Light,
    };
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, next.as_str());
            }
            if let Some(doc) = window.document() {
                if let Ok(doc) = doc.dyn_into::<web_sys::HtmlDocument>() {
                    let _ = doc.set_cookie(&theme_cookie(next));
                }
            }
        }
    }
    next
}
