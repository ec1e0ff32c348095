use super::*;

fn sample_user() -> User {
    User {
        id: "u1".to_owned(),
        email: "alice@example.com".to_owned(),
        name: Some("Alice".to_owned()),
    }
}

#[test]
fn auth_state_defaults_to_loading_unauthenticated() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.authenticated);
    assert!(state.user.is_none());
}

#[test]
fn login_successful_sets_user_and_authenticated() {
    let mut state = AuthState::default();
    state.login_successful(sample_user());
    assert!(state.authenticated);
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u1"));
    // Loading is a separate transition.
    assert!(state.loading);
}

#[test]
fn finish_loading_clears_only_loading() {
    let mut state = AuthState::default();
    state.login_successful(sample_user());
    state.finish_loading();
    assert!(!state.loading);
    assert!(state.authenticated);
}

#[test]
fn logout_resets_session_and_loading() {
    let mut state = AuthState::default();
    state.login_successful(sample_user());
    state.finish_loading();
    state.logout();
    assert!(state.user.is_none());
    assert!(!state.authenticated);
    assert!(!state.loading);
}
