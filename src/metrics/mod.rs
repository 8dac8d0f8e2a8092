//! Metrics facade for the event counter.
//!
//! Only the `metrics` facade is used here; installing a recorder or exporter
//! is left to the embedding process. Without one every call is a no-op.

pub mod meter;

pub use meter::*;
