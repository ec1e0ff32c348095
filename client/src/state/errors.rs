//! Global error slot feeding the transient notification surface.
//!
//! DESIGN
//! ======
//! A single-slot model: at most one pending error is representable, and a
//! new error overwrites an unacknowledged one. The slot is cleared only by
//! the notification host once the user dismisses (or the toast times out).
//! Component-local errors (form validation) never land here.

#[cfg(test)]
#[path = "errors_test.rs"]
mod errors_test;

/// Last unacknowledged cross-cutting error, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorsState {
    pub error: Option<String>,
}

impl ErrorsState {
    /// Record an error, replacing any unacknowledged one.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Acknowledge the pending error.
    pub fn clear(&mut self) {
        self.error = None;
    }
}
