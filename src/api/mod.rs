//! Registration and query API.

pub mod tiered;


pub use tiered::TieredEventCounter;

/// Counts same-kind events over the trailing minute, hour and day.
pub trait EventCounter: Send + Sync {
    /// Records one event occurrence.
    ///
    /// Returns `false` if the event could not be tracked; in that case no
    /// window observes it.
    fn register_event(&self) -> bool;

    fn events_per_minute(&self) -> u64;

    fn events_per_hour(&self) -> u64;

    fn events_per_day(&self) -> u64;
}
