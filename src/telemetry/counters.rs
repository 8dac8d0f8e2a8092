// Package telemetry provides counters for lifecycle operations.

use std::sync::atomic::{AtomicI64, Ordering};

/// Counters for lifecycle operations since the last reset.
pub struct Stats {
    /// Registrations accepted by the scheduler.
    pub registered: AtomicI64,
    /// Registrations rejected and rolled back.
    pub rejected: AtomicI64,
    /// Tier-to-tier migrations performed.
    pub transitions: AtomicI64,
    /// Events lost mid-chain because a successor was rejected.
    pub dropped: AtomicI64,
    /// Events that completed the full day window.
    pub expired: AtomicI64,
}

/// Values returned by [`Stats::reset`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsDelta {
    pub registered: i64,
    pub rejected: i64,
    pub transitions: i64,
    pub dropped: i64,
    pub expired: i64,
}

impl Stats {
    /// Creates new counters.
    pub fn new() -> Self {
        Self {
            registered: AtomicI64::new(0),
            rejected: AtomicI64::new(0),
            transitions: AtomicI64::new(0),
            dropped: AtomicI64::new(0),
            expired: AtomicI64::new(0),
        }
    }

    /// Resets all counters and returns their previous values.
    pub fn reset(&self) -> StatsDelta {
        StatsDelta {
            registered: self.registered.swap(0, Ordering::Relaxed),
            rejected: self.rejected.swap(0, Ordering::Relaxed),
            transitions: self.transitions.swap(0, Ordering::Relaxed),
            dropped: self.dropped.swap(0, Ordering::Relaxed),
            expired: self.expired.swap(0, Ordering::Relaxed),
        }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}
