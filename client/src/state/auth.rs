//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards, the session bootstrap, and user-aware components to
//! coordinate login redirects and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user, whether the session has
/// been verified, and whether the initial bootstrap is still in flight.
///
/// `loading` starts `true` so the shell can withhold protected chrome until
/// the stored token pair has been checked against the identity endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub authenticated: bool,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            authenticated: false,
            loading: true,
        }
    }
}

impl AuthState {
    /// Identity verification (or explicit sign-in) succeeded.
    pub fn login_successful(&mut self, user: User) {
        self.user = Some(user);
        self.authenticated = true;
    }

    /// The initial bootstrap finished, whatever its outcome.
    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    /// Drop the session. Token cleanup is the caller's responsibility; this
    /// only resets the in-memory view of the session.
    pub fn logout(&mut self) {
        self.user = None;
        self.authenticated = false;
        self.loading = false;
    }
}
