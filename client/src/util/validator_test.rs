use super::*;

#[test]
fn accepts_ordinary_addresses() {
    assert!(is_valid_email("you@example.com"));
    assert!(is_valid_email("first.last@sub.domain.org"));
}

#[test]
fn rejects_structurally_broken_addresses() {
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("no-at-sign"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("you@"));
    assert!(!is_valid_email("you@nodot"));
    assert!(!is_valid_email("you@.com"));
    assert!(!is_valid_email("a b@example.com"));
    assert!(!is_valid_email("a@b@example.com"));
}

#[test]
fn password_length_boundary() {
    assert!(!is_valid_password(""));
    assert!(!is_valid_password(&"x".repeat(MIN_PASSWORD_CHARS - 1)));
    assert!(is_valid_password(&"x".repeat(MIN_PASSWORD_CHARS)));
}

#[test]
fn password_counts_characters_not_bytes() {
    // 8 multi-byte characters should pass.
    assert!(is_valid_password("пароль88"));
}
