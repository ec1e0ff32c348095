use super::*;

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(me_endpoint("https://api"), "https://api/user/me");
    assert_eq!(login_endpoint("https://api"), "https://api/auth/login");
    assert_eq!(two_fa_endpoint("https://api"), "https://api/2fa/authenticate");
    assert_eq!(logout_endpoint("https://api"), "https://api/auth/logout");
    assert_eq!(
        live_visitors_endpoint("https://api", "p1"),
        "https://api/log/liveVisitors?pid=p1"
    );
    assert_eq!(
        last_post_endpoint("https://blog"),
        "https://blog/last-post?format=json"
    );
}

#[test]
fn bearer_prefixes_token() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn string_body_becomes_plain_message() {
    let err = error_from_body(400, Some(serde_json::json!("Wrong password.")));
    assert_eq!(err, ApiError::Message("Wrong password.".to_owned()));
    assert_eq!(err.message(), Some("Wrong password."));
}

#[test]
fn nested_message_field_is_unwrapped() {
    let err = error_from_body(404, Some(serde_json::json!({ "message": "Not found" })));
    assert_eq!(err, ApiError::Message("Not found".to_owned()));
}

#[test]
fn empty_message_field_keeps_raw_body() {
    let err = error_from_body(500, Some(serde_json::json!({ "message": "", "code": 5 })));
    match err {
        ApiError::Payload(raw) => assert!(raw.contains("\"code\":5")),
        other => panic!("expected payload error, got {other:?}"),
    }
}

#[test]
fn structured_body_without_message_keeps_raw_body() {
    let err = error_from_body(422, Some(serde_json::json!({ "fields": ["email"] })));
    assert!(matches!(err, ApiError::Payload(_)));
    assert_eq!(err.message(), None);
}

#[test]
fn bodyless_failure_keeps_the_status() {
    assert_eq!(error_from_body(503, None), ApiError::Status(503));
}

#[test]
fn display_is_readable_for_all_shapes() {
    assert_eq!(ApiError::Message("boom".to_owned()).to_string(), "boom");
    assert_eq!(ApiError::Status(503).to_string(), "api error: status 503");
    assert!(ApiError::Network("timeout".to_owned()).to_string().contains("timeout"));
    assert!(ApiError::Payload("{}".to_owned()).to_string().starts_with("api error:"));
}
