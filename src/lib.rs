//! Tiered, self-expiring event counter.
//!
//! Tracks how many same-kind events happened during the trailing minute,
//! hour and day without keeping per-event records. Each registered event is
//! carried by a chain of delayed jobs that move its contribution from the
//! minute tier to the hour tier to the day tier and then drop it.
//!
//! ```no_run
//! use event_counter::{Config, EventCounter, TieredEventCounter};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config::default();
//! event_counter::logger::configure(&cfg);
//!
//! let counter = TieredEventCounter::new(&cfg)?;
//! if !counter.register_event() {
//!     // scheduler saturated, the event is not counted
//! }
//! println!("last minute: {}", counter.events_per_minute());
//! counter.shutdown();
//! # Ok(())
//! # }
//! ```

#[cfg(test)]
mod tests;

#[cfg(test)]
pub use tests::support;

pub mod api;
pub mod config;
pub mod counter;
mod lifecycle;
pub mod logger;
pub mod metrics;
pub mod scheduler;
pub mod telemetry;

pub use api::{EventCounter, TieredEventCounter};
pub use config::{Config, ConfigError, ConfigTrait, TierWindows};
pub use counter::{Tier, TierCounters};
pub use scheduler::{Job, RejectReason, Scheduler, SchedulingRejected, TokioScheduler};
