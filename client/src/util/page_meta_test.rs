use super::*;

#[test]
fn landing_page_gets_product_title() {
    assert_eq!(title_for_path("/"), "Glimpse | Privacy-friendly web analytics");
}

#[test]
fn known_paths_get_lookup_titles() {
    assert_eq!(title_for_path("/signin"), "Sign in | Glimpse");
    assert_eq!(title_for_path("/dashboard"), "Dashboard | Glimpse");
    assert_eq!(title_for_path("/dashboard/"), "Dashboard | Glimpse");
}

#[test]
fn unknown_paths_fall_back_to_site_name() {
    assert_eq!(title_for_path("/no-such-page"), "Glimpse");
}

#[test]
fn project_and_captcha_views_own_their_titles() {
    assert!(title_is_locked("/projects/abc123"));
    assert!(title_is_locked("/captchas/abc123"));
    assert!(!title_is_locked("/projects"));
    assert!(!title_is_locked("/dashboard"));
}

#[test]
fn app_chrome_pages_use_minimal_footer() {
    assert!(uses_minimal_footer("/dashboard"));
    assert!(uses_minimal_footer("/projects/abc123"));
    assert!(uses_minimal_footer("/settings"));
    assert!(uses_minimal_footer("/contact"));
    assert!(!uses_minimal_footer("/"));
    assert!(!uses_minimal_footer("/signin"));
}
