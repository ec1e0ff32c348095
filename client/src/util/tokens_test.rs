use super::*;

#[test]
fn token_storage_keys_are_distinct() {
    assert_ne!(ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY);
}

#[test]
fn getters_return_none_outside_the_browser() {
    // Non-hydrate builds (tests, SSR) have no localStorage.
    assert_eq!(get_access_token(), None);
    assert_eq!(get_refresh_token(), None);
    assert!(!has_session_tokens());
}

#[test]
fn setters_and_removers_are_noops_outside_the_browser() {
    set_access_token("a");
    set_refresh_token("r");
    assert!(!has_session_tokens());
    clear_session_tokens();
    assert_eq!(get_access_token(), None);
}
