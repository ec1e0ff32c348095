use super::*;

#[test]
fn ui_state_default_is_light_without_paddle() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
    assert!(!state.paddle_loaded);
    assert!(state.paddle_last_event.is_none());
}

#[test]
fn theme_round_trips_through_string_form() {
    assert_eq!(Theme::from_str_or_default("dark"), Theme::Dark);
    assert_eq!(Theme::from_str_or_default("light"), Theme::Light);
    assert_eq!(Theme::from_str_or_default("garbage"), Theme::Light);
    assert_eq!(Theme::from_str_or_default(Theme::Dark.as_str()), Theme::Dark);
}

#[test]
fn dark_theme_maps_to_dark_html_class() {
    assert_eq!(Theme::Dark.html_class(), "dark");
    assert_eq!(Theme::Light.html_class(), "");
}

#[test]
fn set_paddle_loaded_is_sticky() {
    let mut state = UiState::default();
    state.set_paddle_loaded();
    assert!(state.paddle_loaded);
}

#[test]
fn set_paddle_last_event_overwrites_previous() {
    let mut state = UiState::default();
    state.set_paddle_last_event(serde_json::json!({"event": "Checkout.Loaded"}));
    state.set_paddle_last_event(serde_json::json!({"event": "Checkout.Complete"}));
    assert_eq!(
        state.paddle_last_event,
        Some(serde_json::json!({"event": "Checkout.Complete"}))
    );
}
