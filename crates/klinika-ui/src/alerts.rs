//! Toast alert queue.
//!
//! An explicit ordered queue of pending alerts with a per-alert TTL, owned
//! by the session state rather than rendered through an ambient portal.
//! Time is passed in explicitly so expiry is deterministic under test.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use uuid::Uuid;

/// Severity of a toast alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Info,
    Success,
    Error,
}

/// One pending toast.
#[derive(Debug, Clone)]
pub struct Alert {
    pub id: Uuid,
    pub level: AlertLevel,
    pub text: String,
    pub expires_at: Instant,
}

/// Ordered queue of pending alerts.
pub struct AlertQueue {
    ttl: Duration,
    items: VecDeque<Alert>,
}

impl AlertQueue {
    /// Create a queue whose alerts live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            items: VecDeque::new(),
        }
    }

    /// Enqueue an alert at `now`, returning its id.
    pub fn enqueue(&mut self, level: AlertLevel, text: impl Into<String>, now: Instant) -> Uuid {
        let alert = Alert {
            id: Uuid::new_v4(),
            level,
            text: text.into(),
            expires_at: now + self.ttl,
        };
        let id = alert.id;
        tracing::debug!(%id, "Alert enqueued");
        self.items.push_back(alert);
        id
    }

    /// Dismiss an alert by id before it expires.
    ///
    /// Returns `true` if the alert was found and removed.
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        if let Some(pos) = self.items.iter().position(|a| a.id == id) {
            self.items.remove(pos);
            true
        } else {
            false
        }
    }

    /// Remove alerts whose TTL elapsed by `now`; returns how many expired.
    pub fn sweep(&mut self, now: Instant) -> usize {
        let before = self.items.len();
        self.items.retain(|a| a.expires_at > now);
        before - self.items.len()
    }

    /// Pending alerts in enqueue order.
    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
