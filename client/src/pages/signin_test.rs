use super::*;

#[test]
fn empty_form_fails_both_fields() {
    let errors = validate_form("", "");
    assert_eq!(errors.email, Some(BAD_EMAIL_ERROR));
    assert_eq!(errors.password, Some(SHORT_PASSWORD_ERROR));
    assert!(!errors.is_valid());
}

#[test]
fn valid_form_has_no_errors() {
    let errors = validate_form("you@example.com", "longenough");
    assert_eq!(errors, FieldErrors::default());
    assert!(errors.is_valid());
}

#[test]
fn fields_fail_independently() {
    let errors = validate_form("not-an-email", "longenough");
    assert!(errors.email.is_some());
    assert!(errors.password.is_none());

    let errors = validate_form("you@example.com", "short");
    assert!(errors.email.is_none());
    assert!(errors.password.is_some());
}

#[test]
fn plain_string_two_fa_error_is_shown_verbatim() {
    let err = ApiError::Message("Code already used.".to_owned());
    assert_eq!(two_fa_field_error(&err), "Code already used.");
}

#[test]
fn structured_two_fa_error_falls_back_to_generic_message() {
    let err = ApiError::Payload(r#"{"code":401}"#.to_owned());
    assert_eq!(two_fa_field_error(&err), INVALID_2FA_ERROR);

    let err = ApiError::Status(500);
    assert_eq!(two_fa_field_error(&err), INVALID_2FA_ERROR);

    let err = ApiError::Network("timeout".to_owned());
    assert_eq!(two_fa_field_error(&err), INVALID_2FA_ERROR);
}
