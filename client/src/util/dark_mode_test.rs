use super::*;

#[test]
fn theme_cookie_carries_the_storage_key_and_theme() {
    let cookie = theme_cookie(Theme::Dark);
    assert!(cookie.starts_with("glimpse_theme=dark; "));
    assert!(cookie.contains("path=/"));
    assert!(cookie.contains("max-age="));
}

#[test]
fn theme_cookie_value_round_trips_through_theme_parsing() {
    for theme in [Theme::Light, Theme::Dark] {
        let cookie = theme_cookie(theme);
        let (name, rest) = cookie.split_once('=').unwrap();
        let value = rest.split(';').next().unwrap();
        assert_eq!(name, STORAGE_KEY);
        assert_eq!(Theme::from_str_or_default(value), theme);
    }
}

#[test]
fn toggle_alternates_between_themes() {
    assert_eq!(toggle(Theme::Light), Theme::Dark);
    assert_eq!(toggle(Theme::Dark), Theme::Light);
}
