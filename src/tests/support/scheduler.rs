//! Deterministic schedulers for lifecycle tests.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::scheduler::{Job, Scheduler, SchedulingRejected};

/// Scheduler that queues jobs until the test fires them by hand.
///
/// Rejection can be switched on at any point to simulate saturation.
pub struct ManualScheduler {
    jobs: Mutex<Vec<(Duration, Job)>>,
    reject: AtomicBool,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self {
            jobs: Mutex::new(Vec::new()),
            reject: AtomicBool::new(false),
        }
    }

    pub fn set_reject(&self, reject: bool) {
        self.reject.store(reject, Ordering::Relaxed);
    }

    /// Number of queued jobs.
    pub fn pending(&self) -> usize {
        self.jobs.lock().len()
    }

    /// Delays of the queued jobs, in submission order.
    pub fn delays(&self) -> Vec<Duration> {
        self.jobs.lock().iter().map(|(delay, _)| *delay).collect()
    }

    /// Runs every job queued so far. Jobs they submit stay queued.
    ///
    /// Returns how many jobs ran.
    pub fn fire_all(&self) -> usize {
        let jobs = std::mem::take(&mut *self.jobs.lock());
        let n = jobs.len();
        for (_, job) in jobs {
            job();
        }
        n
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, job: Job) -> Result<(), SchedulingRejected> {
        if self.reject.load(Ordering::Relaxed) {
            return Err(SchedulingRejected::saturated(0));
        }
        self.jobs.lock().push((delay, job));
        Ok(())
    }
}
