//! Miscellaneous UI flags shared across the shell.
//!
//! Holds the color theme and the payment-script bookkeeping: whether the
//! vendor library finished its one-time setup and the last event it pushed
//! through its callback. Both paddle fields are set once per session and
//! never cleared.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Color theme applied to the document root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Class applied to `<html>` for this theme (empty for light).
    pub fn html_class(self) -> &'static str {
        match self {
            Self::Light => "",
            Self::Dark => "dark",
        }
    }

    /// Parse the persisted/cookie representation.
    pub fn from_str_or_default(value: &str) -> Self {
        match value {
            "dark" => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Shell-level UI state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub theme: Theme,
    pub paddle_loaded: bool,
    pub paddle_last_event: Option<serde_json::Value>,
}

impl UiState {
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Mark the payment library as set up for the rest of the session.
    pub fn set_paddle_loaded(&mut self) {
        self.paddle_loaded = true;
    }

    /// Record the most recent event forwarded by the vendor callback.
    pub fn set_paddle_last_event(&mut self, event: serde_json::Value) {
        self.paddle_last_event = Some(event);
    }
}
