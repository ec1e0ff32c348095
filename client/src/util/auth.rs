//! Route-guard predicates shared by protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards are evaluated at the routing layer before the protected view is
//! constructed, so protected content never renders transiently for the
//! wrong audience. While the session bootstrap is still verifying a stored
//! token pair the guard holds (renders nothing) instead of redirecting.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::auth::AuthState;

/// Which auth condition a route requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardKind {
    /// Only for signed-in users (dashboard, settings).
    Authenticated,
    /// Only for signed-out users (sign-in, sign-up).
    NotAuthenticated,
}

/// Outcome of evaluating a guard against the current auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the protected view.
    Allow,
    /// Bootstrap still in flight; render nothing yet.
    Hold,
    /// Navigate to the guard's redirect target.
    Redirect,
}

impl GuardKind {
    /// Where to send a visitor who fails this guard.
    pub fn redirect_target(self) -> &'static str {
        match self {
            Self::Authenticated => "/signin",
            Self::NotAuthenticated => "/dashboard",
        }
    }

    fn allows(self, state: &AuthState) -> bool {
        match self {
            Self::Authenticated => state.authenticated,
            Self::NotAuthenticated => !state.authenticated,
        }
    }
}

/// Evaluate a guard. Holds while the initial session check is pending so a
/// stored session is not bounced to `/signin` before verification finishes.
pub fn guard_decision(state: &AuthState, kind: GuardKind) -> GuardDecision {
    if kind.allows(state) {
        return GuardDecision::Allow;
    }
    if state.loading {
        return GuardDecision::Hold;
    }
    GuardDecision::Redirect
}
