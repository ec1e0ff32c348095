use super::*;

#[test]
fn user_deserializes_without_optional_name() {
    let user: User = serde_json::from_str(r#"{"id":"u1","email":"a@b.com"}"#).unwrap();
    assert_eq!(user.name, None);
}

#[test]
fn login_response_defaults_to_no_two_fa() {
    let resp: LoginResponse = serde_json::from_str("{}").unwrap();
    assert!(!resp.two_fa_required);
    assert!(resp.access_token.is_none());
}

#[test]
fn login_response_reads_camel_case_fields() {
    let resp: LoginResponse = serde_json::from_str(
        r#"{"twoFaRequired":true,"accessToken":"at","refreshToken":"rt"}"#,
    )
    .unwrap();
    assert!(resp.two_fa_required);
    assert_eq!(resp.access_token.as_deref(), Some("at"));
    assert_eq!(resp.refresh_token.as_deref(), Some("rt"));
}

#[test]
fn two_fa_response_reads_camel_case_token_pair() {
    let resp: TwoFaResponse = serde_json::from_str(
        r#"{"accessToken":"at","refreshToken":"rt","user":{"id":"u1","email":"a@b.com"}}"#,
    )
    .unwrap();
    assert_eq!(resp.access_token, "at");
    assert_eq!(resp.refresh_token, "rt");
    assert_eq!(resp.user.id, "u1");
}

#[test]
fn live_visitor_uses_abbreviated_keys() {
    let visitor: LiveVisitor =
        serde_json::from_str(r#"{"dv":"desktop","br":"Firefox","os":"Linux","cc":"DE"}"#).unwrap();
    assert_eq!(visitor.dv, "desktop");
    assert_eq!(visitor.cc, "DE");
}

#[test]
fn last_post_uses_snake_case_url_path() {
    let post: LastPost =
        serde_json::from_str(r#"{"title":"Hello","url_path":"/hello"}"#).unwrap();
    assert_eq!(post.url_path, "/hello");
}
