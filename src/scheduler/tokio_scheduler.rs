// Package scheduler provides the tokio-backed delayed task scheduler.

use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::{Handle, Runtime};
use tokio::sync::{Semaphore, TryAcquireError};
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::config::SchedulerSettings;

use super::{Job, Scheduler, SchedulingRejected};

const WORKER_THREAD_NAME: &str = "event-counter-worker";

/// Delayed scheduler built on tokio timers.
///
/// Every accepted job holds one slot of a semaphore until its delay elapses,
/// which bounds the number of in-flight jobs to `max_pending`.
pub struct TokioScheduler {
    handle: Handle,
    runtime: Option<Runtime>,
    slots: Arc<Semaphore>,
    capacity: usize,
    shutdown_token: CancellationToken,
}

impl TokioScheduler {
    /// Creates a scheduler that owns a multi-thread runtime.
    ///
    /// The pool is sized to available parallelism unless `workers` is set.
    pub fn new(settings: &SchedulerSettings) -> std::io::Result<Self> {
        let workers = if settings.workers == 0 {
            num_cpus::get()
        } else {
            settings.workers
        };

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(workers)
            .thread_name(WORKER_THREAD_NAME)
            .enable_time()
            .build()?;

        info!(
            component = "scheduler",
            event = "runtime_started",
            workers,
            max_pending = settings.max_pending,
            "delayed scheduler started"
        );

        let handle = runtime.handle().clone();
        Ok(Self::build(handle, Some(runtime), settings.max_pending))
    }

    /// Creates a scheduler on an existing runtime.
    ///
    /// `max_pending` is capped at [`Semaphore::MAX_PERMITS`].
    pub fn with_handle(handle: Handle, settings: &SchedulerSettings) -> Self {
        Self::build(handle, None, settings.max_pending)
    }

    fn build(handle: Handle, runtime: Option<Runtime>, capacity: usize) -> Self {
        let capacity = capacity.min(Semaphore::MAX_PERMITS);
        Self {
            handle,
            runtime,
            slots: Arc::new(Semaphore::new(capacity)),
            capacity,
            shutdown_token: CancellationToken::new(),
        }
    }

    /// Handle of the runtime jobs run on.
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    /// Token cancelled by [`TokioScheduler::shutdown`].
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown_token.clone()
    }

    /// Upper bound on in-flight jobs.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Jobs accepted whose delay has not yet elapsed.
    pub fn pending(&self) -> usize {
        self.capacity - self.slots.available_permits()
    }

    pub fn is_shut_down(&self) -> bool {
        self.shutdown_token.is_cancelled()
    }

    /// Stops accepting work. Jobs already accepted still fire.
    pub fn shutdown(&self) {
        if self.shutdown_token.is_cancelled() {
            return;
        }
        self.shutdown_token.cancel();
        self.slots.close();
        info!(
            component = "scheduler",
            event = "shutdown",
            "delayed scheduler stopped accepting work"
        );
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, job: Job) -> Result<(), SchedulingRejected> {
        if self.shutdown_token.is_cancelled() {
            return Err(SchedulingRejected::shut_down());
        }

        let slot = match self.slots.clone().try_acquire_owned() {
            Ok(slot) => slot,
            Err(TryAcquireError::NoPermits) => {
                return Err(SchedulingRejected::saturated(self.capacity));
            }
            Err(TryAcquireError::Closed) => return Err(SchedulingRejected::shut_down()),
        };

        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            // Free the slot first so the job can schedule its successor into it.
            drop(slot);
            job();
        });

        Ok(())
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        self.shutdown_token.cancel();
        self.slots.close();
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}
