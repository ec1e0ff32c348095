use super::*;

#[test]
fn errors_state_defaults_to_empty() {
    assert_eq!(ErrorsState::default().error, None);
}

#[test]
fn set_error_stores_message() {
    let mut state = ErrorsState::default();
    state.set_error("Network error");
    assert_eq!(state.error.as_deref(), Some("Network error"));
}

#[test]
fn second_error_overwrites_unacknowledged_first() {
    let mut state = ErrorsState::default();
    state.set_error("first");
    state.set_error("second");
    assert_eq!(state.error.as_deref(), Some("second"));
}

#[test]
fn clear_empties_the_slot() {
    let mut state = ErrorsState::default();
    state.set_error("Network error");
    state.clear();
    assert_eq!(state.error, None);
}
