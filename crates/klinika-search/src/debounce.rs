//! Keystroke debouncer for search-as-you-type.
//!
//! Every input restarts a fixed quiet-period window; only once the window
//! elapses with no further input does the pending query settle. Settled
//! queries carry a monotonically increasing sequence number so that stale
//! responses can be discarded by the caller.

use std::time::{Duration, Instant};

/// A query that survived the quiet period and should be sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettledQuery {
    /// Monotonically increasing request sequence number.
    pub seq: u64,
    pub query: String,
}

struct Pending {
    query: String,
    deadline: Instant,
}

/// Debounces raw input into settled queries.
///
/// Time is passed in explicitly so the debouncer is deterministic under test.
pub struct Debouncer {
    delay: Duration,
    pending: Option<Pending>,
    next_seq: u64,
}

impl Debouncer {
    /// Create a debouncer with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            next_seq: 0,
        }
    }

    /// Record an input change at `now`, cancelling and restarting the window.
    pub fn input(&mut self, query: &str, now: Instant) {
        self.pending = Some(Pending {
            query: query.to_string(),
            deadline: now + self.delay,
        });
    }

    /// Drop any pending query without settling it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Deadline of the pending window, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Settle the pending query if its quiet period has elapsed by `now`.
    ///
    /// Returns at most one settled query per window; the pending slot is
    /// consumed on settle.
    pub fn settle(&mut self, now: Instant) -> Option<SettledQuery> {
        let due = matches!(&self.pending, Some(p) if now >= p.deadline);
        if !due {
            return None;
        }
        let pending = self.pending.take()?;
        self.next_seq += 1;
        Some(SettledQuery {
            seq: self.next_seq,
            query: pending.query,
        })
    }
}
