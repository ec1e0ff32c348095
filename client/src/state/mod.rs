//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `errors`, `alerts`, `ui`) so individual
//! components can depend on small focused models. Each struct is provided as
//! an `RwSignal` context by the root component, and every cross-cutting
//! mutation goes through a named transition method via `signal.update(...)`
//! rather than ad-hoc field pokes.

pub mod alerts;
pub mod auth;
pub mod errors;
pub mod ui;
