// Common test utilities for scenario tests.

use std::sync::Arc;
use std::time::Duration;

use crate::api::{EventCounter, TieredEventCounter};
use crate::config::{SchedulerSettings, TierWindows};
use crate::scheduler::TokioScheduler;

use super::ManualScheduler;

pub const MINUTE: Duration = Duration::from_secs(60);
pub const HOUR: Duration = Duration::from_secs(60 * 60);
pub const DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// Builds a counter on the current tokio runtime with production windows.
///
/// Meant for `#[tokio::test(start_paused = true)]`, where sleeping in the
/// test advances the clock and fires lifecycle jobs in deadline order.
pub fn counter_on_current_runtime(max_pending: usize) -> (TieredEventCounter, Arc<TokioScheduler>) {
    let scheduler = Arc::new(TokioScheduler::with_handle(
        tokio::runtime::Handle::current(),
        &SchedulerSettings {
            workers: 0,
            max_pending,
        },
    ));
    let counter = TieredEventCounter::with_scheduler(TierWindows::default(), scheduler.clone())
        .expect("default windows are valid");
    (counter, scheduler)
}

/// Builds a counter whose jobs fire only when the test says so.
pub fn counter_on_manual_scheduler() -> (TieredEventCounter, Arc<ManualScheduler>) {
    let scheduler = Arc::new(ManualScheduler::new());
    let counter = TieredEventCounter::with_scheduler(TierWindows::default(), scheduler.clone())
        .expect("default windows are valid");
    (counter, scheduler)
}

/// Lets paused time run forward by `d`.
pub async fn advance(d: Duration) {
    tokio::time::sleep(d).await;
}

/// Asserts the three derived windows at once.
#[track_caller]
pub fn assert_windows(counter: &impl EventCounter, minute: u64, hour: u64, day: u64) {
    assert_eq!(
        (
            counter.events_per_minute(),
            counter.events_per_hour(),
            counter.events_per_day()
        ),
        (minute, hour, day),
        "(per_minute, per_hour, per_day)"
    );
}
