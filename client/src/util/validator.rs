//! Synchronous form validation helpers.
//!
//! Field-level messages are computed on every form change but only shown
//! after the first submission attempt; these helpers stay pure so pages can
//! decide presentation.

#[cfg(test)]
#[path = "validator_test.rs"]
mod validator_test;

/// Minimum password length accepted by the sign-in/sign-up forms.
pub const MIN_PASSWORD_CHARS: usize = 8;

/// Loose structural email check: one `@` with non-empty local part and a
/// domain containing a dot. The backend performs the authoritative check.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty() && !value.contains(char::is_whitespace)
}

pub fn is_valid_password(value: &str) -> bool {
    value.chars().count() >= MIN_PASSWORD_CHARS
}
