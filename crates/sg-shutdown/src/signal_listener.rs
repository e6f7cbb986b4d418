use crate::cancellation::{CancellationHandle, Trigger};
use crate::{ShutdownError, ShutdownErrorResult, WarnLogger};

use std::sync::Arc;
#[cfg(unix)]
use std::sync::atomic::{AtomicBool, Ordering};
#[cfg(unix)]
use std::sync::{Mutex, PoisonError};
use std::thread::{self, JoinHandle};

const LISTENER_THREAD: &str = "shutdown-listener";
#[cfg(unix)]
const WAKER_THREAD: &str = "shutdown-waker";

#[cfg(unix)]
static SUBSCRIPTIONS: Mutex<Subscriptions> = Mutex::new(Subscriptions {
    active: 0,
    restore_default: None,
});

/// Process-wide bookkeeping of live listeners.
///
/// signal-hook keeps its handler installed after a `Signals` is dropped, so a
/// conditional default action is registered once per termination signal. It
/// is armed while no listener is subscribed, which gives those signals their
/// default behavior back.
#[cfg(unix)]
struct Subscriptions {
    active: usize,
    restore_default: Option<Arc<AtomicBool>>,
}

/// Held by a listener for as long as it is subscribed.
#[cfg(unix)]
struct Subscription {
    restore_default: Arc<AtomicBool>,
}

#[cfg(unix)]
impl Subscription {
    fn acquire() -> ShutdownErrorResult<Self> {
        use signal_hook::consts::TERM_SIGNALS;

        let mut subscriptions = SUBSCRIPTIONS
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let restore_default = match &subscriptions.restore_default {
            Some(flag) => Arc::clone(flag),
            None => {
                let flag = Arc::new(AtomicBool::new(false));
                for &signal in TERM_SIGNALS {
                    signal_hook::flag::register_conditional_default(signal, Arc::clone(&flag))
                        .map_err(|e| ShutdownError::signal_registration(e))?;
                }
                subscriptions.restore_default = Some(Arc::clone(&flag));
                flag
            }
        };

        subscriptions.active += 1;
        restore_default.store(false, Ordering::SeqCst);

        Ok(Self { restore_default })
    }
}

#[cfg(unix)]
impl Drop for Subscription {
    fn drop(&mut self) {
        let mut subscriptions = SUBSCRIPTIONS
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        subscriptions.active = subscriptions.active.saturating_sub(1);
        if subscriptions.active == 0 {
            self.restore_default.store(true, Ordering::SeqCst);
            log::debug!("no signal listener left, termination signals back to default");
        }
    }
}

/// Races OS termination signals against the cancellation handle.
///
/// A signal fires the trigger so the handle ends up "done" either way.
pub(crate) struct SignalListener {
    cancellation: Arc<dyn CancellationHandle>,
    trigger: Trigger,
    logger: Arc<dyn WarnLogger>,
}

impl SignalListener {
    pub(crate) fn new(
        cancellation: Arc<dyn CancellationHandle>,
        trigger: Trigger,
        logger: Arc<dyn WarnLogger>,
    ) -> Self {
        Self {
            cancellation,
            trigger,
            logger,
        }
    }

    /// Subscribe to SIGINT, SIGTERM and SIGQUIT and start listening.
    ///
    /// Subscription happens before this returns, so a signal delivered
    /// afterwards is never handled by the default disposition. Once the
    /// last listener has stopped, termination signals behave as if nobody
    /// had subscribed.
    #[cfg(unix)]
    pub(crate) fn spawn(self) -> ShutdownErrorResult<JoinHandle<()>> {
        use signal_hook::consts::TERM_SIGNALS;
        use signal_hook::iterator::Signals;

        let subscription = Subscription::acquire()?;
        let mut signals =
            Signals::new(TERM_SIGNALS).map_err(|e| ShutdownError::signal_registration(e))?;
        let handle = signals.handle();

        // Closing the iterator is how cancellation wins the race.
        let cancellation = Arc::clone(&self.cancellation);
        let waker_handle = handle.clone();
        thread::Builder::new()
            .name(WAKER_THREAD.into())
            .spawn(move || {
                cancellation.wait();
                waker_handle.close();
            })
            .map_err(|e| ShutdownError::thread_spawn(WAKER_THREAD, e))?;

        thread::Builder::new()
            .name(LISTENER_THREAD.into())
            .spawn(move || {
                match signals.forever().next() {
                    Some(signal) => {
                        self.logger.warn(format_args!(
                            "get signal <{}>, notify to shutdown.",
                            signal_name(signal)
                        ));
                        (self.trigger)();
                    }
                    None => self.announce_cancelled(),
                }

                handle.close();
                drop(signals);
                drop(subscription);
                log::debug!("signal listener stopped");
            })
            .map_err(|e| ShutdownError::thread_spawn(LISTENER_THREAD, e))
    }

    #[cfg(not(unix))]
    pub(crate) fn spawn(self) -> ShutdownErrorResult<JoinHandle<()>> {
        thread::Builder::new()
            .name(LISTENER_THREAD.into())
            .spawn(move || {
                self.cancellation.wait();
                self.announce_cancelled();
            })
            .map_err(|e| ShutdownError::thread_spawn(LISTENER_THREAD, e))
    }

    fn announce_cancelled(&self) {
        self.logger
            .warn(format_args!("something cause context canceled"));
    }
}

/// `SIGINT`-style name for a raw signal number.
#[cfg(unix)]
pub(crate) fn signal_name(signal: std::ffi::c_int) -> String {
    match nix::sys::signal::Signal::try_from(signal) {
        Ok(signal) => signal.as_str().to_string(),
        Err(_) => format!("signal {}", signal),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::signal_name;

    use googletest::assert_that;
    use googletest::prelude::eq;

    #[test]
    fn given_known_signal_numbers_when_named_then_posix_names() {
        assert_that!(signal_name(signal_hook::consts::SIGINT), eq("SIGINT"));
        assert_that!(signal_name(signal_hook::consts::SIGTERM), eq("SIGTERM"));
        assert_that!(signal_name(signal_hook::consts::SIGQUIT), eq("SIGQUIT"));
    }

    #[test]
    fn given_unknown_signal_number_when_named_then_numeric_fallback() {
        assert_that!(signal_name(4242), eq("signal 4242"));
    }
}
