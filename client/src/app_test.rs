use super::*;

#[test]
fn chrome_withheld_while_stored_session_verifies() {
    // Token pair present, bootstrap still loading: no flash of anon chrome.
    assert!(!chrome_visible(true, true));
}

#[test]
fn chrome_visible_without_tokens_even_while_loading() {
    assert!(chrome_visible(false, true));
}

#[test]
fn chrome_visible_once_loading_finished() {
    assert!(chrome_visible(true, false));
    assert!(chrome_visible(false, false));
}

#[test]
fn header_hidden_only_on_landing_page() {
    assert!(!show_header("/"));
    assert!(show_header("/signin"));
    assert!(show_header("/dashboard"));
    assert!(show_header("/projects/p1"));
}

#[test]
fn boot_context_defaults_are_neutral() {
    let boot = BootContext::default();
    assert_eq!(boot.locale, "");
    assert_eq!(boot.theme, Theme::Light);
    assert_eq!(boot.env, EnvConfig::default());
}
