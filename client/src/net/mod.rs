//! Networking modules for the external analytics API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the REST calls (identity, login, 2FA, live visitors, blog),
//! `types` defines the wire schema those calls share.

pub mod api;
pub mod types;
