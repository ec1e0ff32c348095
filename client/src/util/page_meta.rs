//! Document title and footer-variant computation from the current path.
//!
//! DESIGN
//! ======
//! Titles come from a lookup keyed by path. Paths matching the locked prefix
//! list manage their own titles (project dashboards set titles from fetched
//! data) and must never be touched by the shell. The footer renders a
//! reduced variant on app-chrome pages.

#[cfg(test)]
#[path = "page_meta_test.rs"]
mod page_meta_test;

/// Product name used as the default title and title suffix.
pub const SITE_NAME: &str = "Glimpse";

/// Path fragments whose pages own their document title.
const TITLE_LOCKED: [&str; 2] = ["/projects/", "/captchas/"];

/// Path fragments rendered with the reduced footer.
const MINIMAL_FOOTER: [&str; 4] = ["/projects", "/dashboard", "/settings", "/contact"];

/// Whether the shell must leave the document title alone for this path.
pub fn title_is_locked(path: &str) -> bool {
    TITLE_LOCKED.iter().any(|page| path.contains(page))
}

/// Whether this path uses the reduced footer variant.
pub fn uses_minimal_footer(path: &str) -> bool {
    MINIMAL_FOOTER.iter().any(|page| path.contains(page))
}

/// Title for a known path, or the default product title.
pub fn title_for_path(path: &str) -> String {
    let page = match path.trim_end_matches('/') {
        "" => return format!("{SITE_NAME} | Privacy-friendly web analytics"),
        "/signin" => "Sign in",
        "/signup" => "Sign up",
        "/dashboard" => "Dashboard",
        "/settings" => "Account settings",
        "/contact" => "Contact us",
        "/billing" => "Billing",
        _ => return SITE_NAME.to_owned(),
    };
    format!("{page} | {SITE_NAME}")
}
