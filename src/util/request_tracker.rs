//! Generation counter for discarding stale async responses.
//!
//! A component calls [`RequestTracker::begin`] before spawning a request and
//! checks [`RequestTracker::is_current`] before applying the response. Starting
//! a newer request or calling [`RequestTracker::cancel`] (from `on_cleanup`)
//! makes every older ticket stale.

#[cfg(test)]
#[path = "request_tracker_test.rs"]
mod request_tracker_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Handle identifying one started request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Clone, Debug, Default)]
pub struct RequestTracker {
    generation: Arc<AtomicU64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request, superseding any in flight.
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.generation.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Whether `ticket` is still the latest request and was not cancelled.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.generation.load(Ordering::Relaxed) == ticket.0
    }

    /// Invalidate every outstanding ticket.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::Relaxed);
    }
}
