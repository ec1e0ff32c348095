//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shell chrome and shared widgets while reading/writing
//! global state from Leptos context providers.

pub mod alert_host;
pub mod footer;
pub mod guarded;
pub mod header;
pub mod live_visitors;
