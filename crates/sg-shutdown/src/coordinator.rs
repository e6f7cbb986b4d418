use crate::cancellation::{CancellationHandle, Trigger};
use crate::signal_listener::SignalListener;
use crate::{CoordinatorBuilder, DrainOutcome, JobGuard, ShutdownErrorResult, WarnLogger};

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::thread;
use std::time::{Duration, Instant};

/// Graceful shutdown coordinator.
///
/// Counts in-flight jobs, turns a termination signal or an explicit
/// cancellation into one "done" state, and blocks [`stand_by`] callers
/// until every job has finished.
///
/// [`stand_by`]: Coordinator::stand_by
pub struct Coordinator {
    active_jobs: AtomicI64,
    cancellation: Arc<dyn CancellationHandle>,
    trigger: Trigger,
    logger: Arc<dyn WarnLogger>,
    poll_interval: Duration,
    drain_deadline: Option<Duration>,
    listener_started: AtomicBool,
}

impl Coordinator {
    pub fn builder() -> CoordinatorBuilder {
        CoordinatorBuilder::new()
    }

    pub(crate) fn new(
        cancellation: Arc<dyn CancellationHandle>,
        trigger: Trigger,
        logger: Arc<dyn WarnLogger>,
        poll_interval: Duration,
        drain_deadline: Option<Duration>,
    ) -> Self {
        Self {
            active_jobs: AtomicI64::new(0),
            cancellation,
            trigger,
            logger,
            poll_interval,
            drain_deadline,
            listener_started: AtomicBool::new(false),
        }
    }

    /// Register one in-flight job.
    pub fn add_job(&self) {
        let active = self.active_jobs.fetch_add(1, Ordering::SeqCst) + 1;
        log::trace!("job registered, {} active", active);
    }

    /// Report completion of a job registered with [`Coordinator::add_job`].
    ///
    /// Unbalanced calls are not detected; the count may go negative.
    pub fn done_job(&self) {
        let active = self.active_jobs.fetch_sub(1, Ordering::SeqCst) - 1;
        log::trace!("job done, {} active", active);
    }

    /// Register a job that stays active until the returned guard is dropped.
    pub fn job(self: &Arc<Self>) -> JobGuard {
        JobGuard::new(Arc::clone(self))
    }

    pub fn active_jobs(&self) -> i64 {
        self.active_jobs.load(Ordering::SeqCst)
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub fn drain_deadline(&self) -> Option<Duration> {
        self.drain_deadline
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    /// Request shutdown through the configured trigger.
    pub fn cancel(&self) {
        (self.trigger)();
    }

    /// Block until shutdown has been requested and every job has finished.
    ///
    /// The first call starts a background listener for termination signals.
    /// Later calls only wait and drain again.
    pub fn stand_by(&self) -> ShutdownErrorResult<DrainOutcome> {
        if !self.listener_started.swap(true, Ordering::AcqRel) {
            let listener = SignalListener::new(
                Arc::clone(&self.cancellation),
                Arc::clone(&self.trigger),
                Arc::clone(&self.logger),
            );

            if let Err(e) = listener.spawn() {
                self.listener_started.store(false, Ordering::Release);
                return Err(e);
            }
        }

        self.cancellation.wait();
        log::debug!("shutdown requested, draining {} jobs", self.active_jobs());

        Ok(self.drain())
    }

    fn drain(&self) -> DrainOutcome {
        let started = Instant::now();

        loop {
            let remaining = self.active_jobs.load(Ordering::SeqCst);
            if remaining <= 0 {
                break;
            }

            let nap = match self.drain_deadline {
                Some(deadline) => {
                    let elapsed = started.elapsed();
                    if elapsed >= deadline {
                        self.logger.warn(format_args!(
                            "drain deadline of {} exceeded, {} jobs still running, forcing exit",
                            humantime::format_duration(deadline),
                            remaining
                        ));
                        return DrainOutcome::DeadlineExceeded { remaining };
                    }
                    self.poll_interval.min(deadline - elapsed)
                }
                None => self.poll_interval,
            };

            thread::sleep(nap);
            self.logger
                .warn(format_args!("{} jobs waiting to stop", remaining));
        }

        self.logger.warn(format_args!(">>>>  graceful shutdown  <<<<"));
        DrainOutcome::Completed
    }
}

impl fmt::Debug for Coordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Coordinator")
            .field("active_jobs", &self.active_jobs())
            .field("cancelled", &self.is_cancelled())
            .field("poll_interval", &self.poll_interval)
            .field("drain_deadline", &self.drain_deadline)
            .finish_non_exhaustive()
    }
}
