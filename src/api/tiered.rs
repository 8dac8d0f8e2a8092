// Package api provides the tiered, self-expiring event counter.

use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::config::{Config, ConfigError, ConfigTrait, TierWindows, DEFAULT_TELEMETRY_INTERVAL};
use crate::counter::Tier;
use crate::lifecycle::{self, Core};
use crate::scheduler::{Scheduler, SchedulingRejected, TokioScheduler};
use crate::telemetry::{self, Stats};

use super::EventCounter;

/// Event counter whose per-event state lives only in scheduled jobs.
///
/// Registration bumps the minute tier and schedules the first lifecycle job;
/// from there the event migrates to the hour and day tiers and finally
/// vanishes. Queries are lock-free sums over the tier counters and may be
/// off by one event while a migration is in flight.
///
/// Clones share the same counters.
#[derive(Clone)]
pub struct TieredEventCounter {
    core: Arc<Core>,
    owned_scheduler: Option<Arc<TokioScheduler>>,
}

impl TieredEventCounter {
    /// Creates a counter backed by its own scheduler runtime.
    ///
    /// Starts the telemetry logger when it is enabled in `cfg`.
    pub fn new(cfg: &Config) -> Result<Self> {
        cfg.validate()?;

        let scheduler = Arc::new(
            TokioScheduler::new(&cfg.scheduler()).context("failed to build scheduler runtime")?,
        );
        let counter = Self {
            core: Arc::new(Core::new(cfg.windows(), scheduler.clone())),
            owned_scheduler: Some(scheduler.clone()),
        };

        if let Some(telemetry) = cfg.telemetry().filter(|t| t.enabled) {
            counter.spawn_telemetry(
                scheduler.handle(),
                scheduler.shutdown_token(),
                telemetry.interval.unwrap_or(DEFAULT_TELEMETRY_INTERVAL),
            );
        }

        info!(
            component = "counter",
            event = "started",
            minute = ?cfg.windows().minute,
            hour = ?cfg.windows().hour,
            day = ?cfg.windows().day,
            "tiered event counter started"
        );

        Ok(counter)
    }

    /// Creates a counter on top of a caller-provided scheduler.
    pub fn with_scheduler(
        windows: TierWindows,
        scheduler: Arc<dyn Scheduler>,
    ) -> Result<Self, ConfigError> {
        windows.validate()?;
        Ok(Self {
            core: Arc::new(Core::new(windows, scheduler)),
            owned_scheduler: None,
        })
    }

    /// Registers an event, reporting why it was refused.
    pub fn try_register_event(&self) -> Result<(), SchedulingRejected> {
        lifecycle::enter(&self.core)
    }

    /// Live count of a single tier.
    pub fn tier_count(&self, tier: Tier) -> u64 {
        self.core.counters.read(tier)
    }

    pub fn windows(&self) -> TierWindows {
        self.core.windows
    }

    /// Lifecycle statistics since the last reset.
    pub fn stats(&self) -> &Stats {
        &self.core.stats
    }

    /// Spawns the periodic stats logger on `handle` until `shutdown_token` fires.
    ///
    /// The logger only holds a weak reference, so it also stops once every
    /// handle to this counter is dropped.
    pub fn spawn_telemetry(&self, handle: &Handle, shutdown_token: CancellationToken, each: Duration) {
        let core = Arc::downgrade(&self.core);
        handle.spawn(async move {
            telemetry::logger(shutdown_token, core, each).await;
        });
    }

    #[cfg(test)]
    pub(crate) fn core(&self) -> &Arc<Core> {
        &self.core
    }

    /// Stops the owned scheduler from accepting work.
    ///
    /// Registration fails from then on. Events already in flight leave their
    /// current tier on schedule and are dropped at the next transition.
    /// No-op when the scheduler was provided by the caller.
    pub fn shutdown(&self) {
        if let Some(scheduler) = &self.owned_scheduler {
            scheduler.shutdown();
        }
    }
}

impl EventCounter for TieredEventCounter {
    fn register_event(&self) -> bool {
        self.try_register_event().is_ok()
    }

    fn events_per_minute(&self) -> u64 {
        self.core.counters.per_minute()
    }

    fn events_per_hour(&self) -> u64 {
        self.core.counters.per_hour()
    }

    fn events_per_day(&self) -> u64 {
        self.core.counters.per_day()
    }
}
