//! Global alert slot for non-error transient notices.
//!
//! Same single-slot overwrite semantics as [`crate::state::errors`], but for
//! informational messages (settings saved, email sent, etc.). The two slots
//! are independent: a simultaneous error and alert both render.

#[cfg(test)]
#[path = "alerts_test.rs"]
mod alerts_test;

/// Severity of a transient alert, mapped to toast styling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertKind {
    #[default]
    Info,
    Success,
    Error,
}

impl AlertKind {
    /// CSS modifier class for the toast element.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "toast--info",
            Self::Success => "toast--success",
            Self::Error => "toast--error",
        }
    }
}

/// Last unacknowledged alert, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlertsState {
    pub message: Option<String>,
    pub kind: AlertKind,
}

impl AlertsState {
    /// Record an alert, replacing any unacknowledged one.
    pub fn set_alert(&mut self, message: impl Into<String>, kind: AlertKind) {
        self.message = Some(message.into());
        self.kind = kind;
    }

    /// Acknowledge the pending alert.
    pub fn clear(&mut self) {
        self.message = None;
        self.kind = AlertKind::default();
    }
}
