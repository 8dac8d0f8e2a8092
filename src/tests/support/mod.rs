// Shared test support code for scenario tests.

pub mod common;
pub mod scheduler;

pub use common::*;
pub use scheduler::ManualScheduler;
