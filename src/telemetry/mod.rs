//! Lifecycle telemetry.

pub mod counters;
pub mod logger;

pub use counters::{Stats, StatsDelta};
pub(crate) use logger::logger;
