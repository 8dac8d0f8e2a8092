//! Event lifecycle.
//!
//! An event's contribution walks `MinutePending -> HourPending -> DayPending
//! -> Expired`. Each state is a single scheduled job tagged with the tier the
//! event currently occupies; when it fires it moves the event out of that
//! tier and schedules its successor. Nothing else remembers the event.
//!
//! A successor that the scheduler refuses ends the chain early. The tier the
//! event was about to occupy is rolled back, so the event simply disappears
//! from all windows. That loss is counted in [`Stats::dropped`] but never
//! retried nor reported to a caller.


use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::config::TierWindows;
use crate::counter::{Tier, TierCounters};
use crate::scheduler::{Scheduler, SchedulingRejected};
use crate::telemetry::Stats;

/// State shared by every in-flight lifecycle job and by the public API.
pub(crate) struct Core {
    pub(crate) counters: TierCounters,
    pub(crate) scheduler: Arc<dyn Scheduler>,
    pub(crate) windows: TierWindows,
    pub(crate) stats: Stats,
}

impl Core {
    pub(crate) fn new(windows: TierWindows, scheduler: Arc<dyn Scheduler>) -> Self {
        Self {
            counters: TierCounters::new(),
            scheduler,
            windows,
            stats: Stats::new(),
        }
    }
}

/// Enters `MinutePending` for a freshly registered event.
///
/// The minute counter is bumped before scheduling so the event is visible
/// immediately; on rejection it is taken back and no job exists.
pub(crate) fn enter(core: &Arc<Core>) -> Result<(), SchedulingRejected> {
    core.counters.increment(Tier::Minute);

    if let Err(err) = schedule_stage(core, Tier::Minute) {
        core.counters.decrement(Tier::Minute);
        core.stats.rejected.fetch_add(1, Ordering::Relaxed);
        trace!(
            component = "lifecycle",
            event = "registration_rejected",
            error = %err,
            "event not registered"
        );
        return Err(err);
    }

    core.stats.registered.fetch_add(1, Ordering::Relaxed);
    Ok(())
}

/// Runs when the job guarding `tier` fires.
pub(crate) fn fire(core: &Arc<Core>, tier: Tier) {
    core.counters.decrement(tier);

    let Some(next) = tier.next() else {
        core.stats.expired.fetch_add(1, Ordering::Relaxed);
        return;
    };

    core.counters.increment(next);
    core.stats.transitions.fetch_add(1, Ordering::Relaxed);

    if let Err(err) = schedule_stage(core, next) {
        core.counters.decrement(next);
        core.stats.dropped.fetch_add(1, Ordering::Relaxed);
        debug!(
            component = "lifecycle",
            event = "transition_dropped",
            from = %tier,
            to = %next,
            error = %err,
            "event dropped from all windows"
        );
    }
}

fn schedule_stage(core: &Arc<Core>, tier: Tier) -> Result<(), SchedulingRejected> {
    let delay = core.windows.segment(tier);
    let owner = Arc::clone(core);
    core.scheduler
        .schedule(delay, Box::new(move || fire(&owner, tier)))
}
