use super::*;
use axum::http::HeaderValue;

fn headers(pairs: &[(&axum::http::HeaderName, &str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        map.insert(*name, HeaderValue::from_str(value).unwrap());
    }
    map
}

#[test]
fn cookie_value_finds_named_cookie() {
    assert_eq!(cookie_value("a=1; lng=de; b=2", "lng"), Some("de"));
    assert_eq!(cookie_value("a=1", "lng"), None);
    assert_eq!(cookie_value("", "lng"), None);
}

#[test]
fn accept_language_picks_first_supported_tag() {
    assert_eq!(accept_language_locale("fr,de;q=0.8"), Some("de".to_owned()));
    assert_eq!(accept_language_locale("uk-UA,en;q=0.5"), Some("uk".to_owned()));
    assert_eq!(accept_language_locale("ja,fr"), None);
}

#[test]
fn accept_language_prefers_higher_quality() {
    assert_eq!(
        accept_language_locale("de;q=0.4,ru;q=0.9"),
        Some("ru".to_owned())
    );
}

#[test]
fn accept_language_tie_keeps_earlier_entry() {
    assert_eq!(accept_language_locale("de,ru"), Some("de".to_owned()));
}

#[test]
fn accept_language_never_selects_rejected_tags() {
    assert_eq!(accept_language_locale("de;q=0"), None);
    assert_eq!(accept_language_locale("de;q=0,ru"), Some("ru".to_owned()));
    assert_eq!(accept_language_locale("de;q=0.0,ja"), None);
}

#[test]
fn detect_language_cookie_overrides_header() {
    let map = headers(&[
        (&COOKIE, "lng=uk"),
        (&ACCEPT_LANGUAGE, "de"),
    ]);
    assert_eq!(detect_language(&map), "uk");
}

#[test]
fn detect_language_ignores_unsupported_cookie() {
    let map = headers(&[(&COOKIE, "lng=xx"), (&ACCEPT_LANGUAGE, "de")]);
    assert_eq!(detect_language(&map), "de");
}

#[test]
fn detect_language_defaults_to_english() {
    assert_eq!(detect_language(&HeaderMap::new()), "en");
}

#[test]
fn detect_theme_reads_cookie() {
    let map = headers(&[(&COOKIE, "glimpse_theme=dark")]);
    assert_eq!(detect_theme(&map), Theme::Dark);
}

#[test]
fn detect_theme_reads_the_cookie_the_toggle_writes() {
    // The client persists the preference as a cookie; the name and value
    // must survive the round trip through the Cookie request header.
    let written = client::util::dark_mode::theme_cookie(Theme::Dark);
    let pair = written.split(';').next().unwrap();
    let map = headers(&[(&COOKIE, pair)]);
    assert_eq!(detect_theme(&map), Theme::Dark);
}

#[test]
fn detect_theme_defaults_to_light() {
    assert_eq!(detect_theme(&HeaderMap::new()), Theme::Light);
    let map = headers(&[(&COOKIE, "glimpse_theme=purple")]);
    assert_eq!(detect_theme(&map), Theme::Light);
}
