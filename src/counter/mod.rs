//! Tiered counter store.
//!
//! Three independent counters, one per tier. Every mutation touches a single
//! atomic, so a reader summing tiers may straddle an in-flight migration and
//! be off by one event. That approximation is accepted; there is no lock.

pub mod tier;

#[cfg(test)]
mod counters_test;

pub use tier::Tier;

use std::sync::atomic::{AtomicU64, Ordering};

/// Per-tier live counts.
pub struct TierCounters {
    counts: [AtomicU64; 3],
}

impl TierCounters {
    /// Creates zeroed counters.
    pub fn new() -> Self {
        Self {
            counts: [AtomicU64::new(0), AtomicU64::new(0), AtomicU64::new(0)],
        }
    }

    /// Adds one event to the tier and returns the updated count.
    pub fn increment(&self, tier: Tier) -> u64 {
        self.counts[tier.index()].fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Removes one event from the tier and returns the updated count.
    ///
    /// Each decrement is paired with an earlier increment of the same tier by
    /// the lifecycle, so the count never goes below zero.
    pub fn decrement(&self, tier: Tier) -> u64 {
        let prev = self.counts[tier.index()].fetch_sub(1, Ordering::AcqRel);
        debug_assert!(prev > 0, "{} counter underflow", tier);
        prev.wrapping_sub(1)
    }

    /// Snapshot of a single tier.
    pub fn read(&self, tier: Tier) -> u64 {
        self.counts[tier.index()].load(Ordering::Acquire)
    }

    /// Events seen during the trailing minute.
    pub fn per_minute(&self) -> u64 {
        self.read(Tier::Minute)
    }

    /// Events seen during the trailing hour.
    pub fn per_hour(&self) -> u64 {
        self.read(Tier::Minute) + self.read(Tier::Hour)
    }

    /// Events seen during the trailing day.
    pub fn per_day(&self) -> u64 {
        self.read(Tier::Minute) + self.read(Tier::Hour) + self.read(Tier::Day)
    }
}

impl Default for TierCounters {
    fn default() -> Self {
        Self::new()
    }
}
