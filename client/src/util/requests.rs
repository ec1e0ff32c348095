//! Stale-result protection for fire-and-forget fetches.
//!
//! DESIGN
//! ======
//! Background fetches (identity check, live visitors, blog post) have no
//! transport-level cancellation. Instead each initiation takes a ticket from
//! a monotonically increasing sequence; when the response arrives, the
//! ticket is checked and a superseded response is discarded rather than
//! applied to state. The counter is `Arc<AtomicU64>` so sequences can be
//! captured by the `Send + Sync` closures Leptos views require.

#[cfg(test)]
#[path = "requests_test.rs"]
mod requests_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic counter handing out tickets for in-flight requests.
#[derive(Clone, Debug, Default)]
pub struct RequestSequence {
    current: Arc<AtomicU64>,
}

/// Ticket captured at request initiation.
#[derive(Clone, Debug)]
pub struct RequestTicket {
    issued: u64,
    current: Arc<AtomicU64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, invalidating all previously issued tickets.
    pub fn begin(&self) -> RequestTicket {
        let next = self.current.load(Ordering::SeqCst) + 1;
        self.current.store(next, Ordering::SeqCst);
        RequestTicket {
            issued: next,
            current: Arc::clone(&self.current),
        }
    }
}

impl RequestTicket {
    /// Whether this ticket still represents the newest request.
    pub fn is_current(&self) -> bool {
        self.issued == self.current.load(Ordering::SeqCst)
    }
}
