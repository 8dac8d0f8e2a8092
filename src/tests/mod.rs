//! Scenario tests for the tiered event counter.
//!
//! Time-dependent cases run on a paused tokio clock so the whole
//! minute/hour/day lifecycle completes instantly and deterministically.

mod cases_telemetry_test;

pub mod support;
