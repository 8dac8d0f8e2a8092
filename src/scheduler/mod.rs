//! Delayed task scheduler.
//!
//! Runs a unit of work no earlier than a given delay on a bounded worker
//! pool. Submission either succeeds or is rejected synchronously; accepted
//! work is never cancelled by the scheduler.

pub mod tokio_scheduler;


pub use tokio_scheduler::TokioScheduler;

use std::time::Duration;

/// Unit of work handed to a scheduler.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Why a submission was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The bound on in-flight jobs is reached.
    Saturated { capacity: usize },
    /// The scheduler no longer accepts work.
    ShutDown,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::Saturated { capacity } => write!(f, "saturated at {} pending jobs", capacity),
            RejectReason::ShutDown => f.write_str("shut down"),
        }
    }
}

/// The scheduler could not accept a new unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("scheduling rejected: {reason}")]
pub struct SchedulingRejected {
    pub reason: RejectReason,
}

impl SchedulingRejected {
    pub fn saturated(capacity: usize) -> Self {
        Self {
            reason: RejectReason::Saturated { capacity },
        }
    }

    pub fn shut_down() -> Self {
        Self {
            reason: RejectReason::ShutDown,
        }
    }
}

/// Executes jobs after a delay.
///
/// Delays are one-sided: a job never runs early but may run arbitrarily
/// late under load. No ordering is promised between jobs due at the same
/// instant.
pub trait Scheduler: Send + Sync {
    fn schedule(&self, delay: Duration, job: Job) -> Result<(), SchedulingRejected>;
}
