use super::*;
use crate::net::types::User;

fn authed() -> AuthState {
    AuthState {
        user: Some(User {
            id: "u1".to_owned(),
            email: "a@b.com".to_owned(),
            name: None,
        }),
        authenticated: true,
        loading: false,
    }
}

fn anon() -> AuthState {
    AuthState {
        user: None,
        authenticated: false,
        loading: false,
    }
}

#[test]
fn authenticated_guard_allows_signed_in_users() {
    assert_eq!(guard_decision(&authed(), GuardKind::Authenticated), GuardDecision::Allow);
}

#[test]
fn authenticated_guard_redirects_signed_out_users() {
    assert_eq!(guard_decision(&anon(), GuardKind::Authenticated), GuardDecision::Redirect);
}

#[test]
fn authenticated_guard_holds_while_bootstrap_pending() {
    let state = AuthState::default();
    assert!(state.loading);
    assert_eq!(guard_decision(&state, GuardKind::Authenticated), GuardDecision::Hold);
}

#[test]
fn not_authenticated_guard_allows_signed_out_users() {
    assert_eq!(guard_decision(&anon(), GuardKind::NotAuthenticated), GuardDecision::Allow);
}

#[test]
fn not_authenticated_guard_redirects_signed_in_users() {
    assert_eq!(
        guard_decision(&authed(), GuardKind::NotAuthenticated),
        GuardDecision::Redirect
    );
}

#[test]
fn redirect_targets_point_at_each_other() {
    assert_eq!(GuardKind::Authenticated.redirect_target(), "/signin");
    assert_eq!(GuardKind::NotAuthenticated.redirect_target(), "/dashboard");
}
