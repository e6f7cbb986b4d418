use crate::cancellation::{CancellationHandle, Trigger, token_trigger};
use crate::{Coordinator, ShutdownError, ShutdownErrorResult, WarnLogger};

use std::sync::Arc;
use std::time::Duration;

use sg_config::{DEFAULT_POLL_INTERVAL_MS, MIN_POLL_INTERVAL_MS, ShutdownConfig};
use tokio_util::sync::CancellationToken;

/// Collects the collaborators of a [`Coordinator`].
///
/// The cancellation handle, its trigger and the logger are all required;
/// `build` reports the first missing one in that order.
pub struct CoordinatorBuilder {
    cancellation: Option<Arc<dyn CancellationHandle>>,
    trigger: Option<Trigger>,
    logger: Option<Arc<dyn WarnLogger>>,
    poll_interval: Duration,
    drain_deadline: Option<Duration>,
}

impl CoordinatorBuilder {
    pub fn new() -> Self {
        Self {
            cancellation: None,
            trigger: None,
            logger: None,
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            drain_deadline: None,
        }
    }

    pub fn cancellation<C>(mut self, handle: C) -> Self
    where
        C: CancellationHandle + 'static,
    {
        let handle: Arc<dyn CancellationHandle> = Arc::new(handle);
        self.cancellation = Some(handle);
        self
    }

    pub fn trigger<F>(mut self, trigger: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        let trigger: Trigger = Arc::new(trigger);
        self.trigger = Some(trigger);
        self
    }

    /// Use `token` both as the cancellation handle and as its trigger.
    pub fn token(mut self, token: CancellationToken) -> Self {
        self.trigger = Some(token_trigger(token.clone()));
        let handle: Arc<dyn CancellationHandle> = Arc::new(token);
        self.cancellation = Some(handle);
        self
    }

    pub fn logger<L>(mut self, logger: Arc<L>) -> Self
    where
        L: WarnLogger + 'static,
    {
        let logger: Arc<dyn WarnLogger> = logger;
        self.logger = Some(logger);
        self
    }

    /// Delay between two checks of the job count while draining.
    ///
    /// Raised to `MIN_POLL_INTERVAL_MS` when shorter.
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval.max(Duration::from_millis(MIN_POLL_INTERVAL_MS));
        self
    }

    /// Stop waiting for jobs once `deadline` has passed. None waits forever.
    pub fn drain_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.drain_deadline = deadline;
        self
    }

    pub fn with_config(self, config: &ShutdownConfig) -> Self {
        self.poll_interval(config.poll_interval())
            .drain_deadline(config.drain_deadline())
    }

    #[track_caller]
    pub fn build(self) -> ShutdownErrorResult<Coordinator> {
        let Some(cancellation) = self.cancellation else {
            return Err(ShutdownError::invalid_argument("cancellation handle"));
        };
        let Some(trigger) = self.trigger else {
            return Err(ShutdownError::invalid_argument("trigger"));
        };
        let Some(logger) = self.logger else {
            return Err(ShutdownError::invalid_argument("logger"));
        };

        Ok(Coordinator::new(
            cancellation,
            trigger,
            logger,
            self.poll_interval,
            self.drain_deadline,
        ))
    }
}

impl Default for CoordinatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
