
use crate::{CancellationHandle, WarnLogger};

use std::fmt;
use std::sync::{Condvar, Mutex};
use std::time::{Duration, Instant};

pub(crate) const CONTEXT_CANCELED: &str = "something cause context canceled";
pub(crate) const GRACEFUL_SHUTDOWN: &str = ">>>>  graceful shutdown  <<<<";

/// Keeps every warning so tests can check what was logged
#[derive(Default)]
pub(crate) struct RecordingLogger {
    messages: Mutex<Vec<String>>,
}

impl RecordingLogger {
    pub(crate) fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub(crate) fn count(&self, message: &str) -> usize {
        self.messages().iter().filter(|m| m.as_str() == message).count()
    }

    pub(crate) fn count_waiting(&self) -> usize {
        self.messages()
            .iter()
            .filter(|m| m.ends_with("jobs waiting to stop"))
            .count()
    }

    /// The listener logs from its own thread, so poll for a bounded time
    pub(crate) fn wait_for(&self, message: &str, timeout: Duration) -> bool {
        let started = Instant::now();
        while started.elapsed() < timeout {
            if self.count(message) > 0 {
                return true;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        false
    }
}

impl WarnLogger for RecordingLogger {
    fn warn(&self, message: fmt::Arguments<'_>) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Cancellation handle built on a plain mutex and condvar
#[derive(Default)]
pub(crate) struct FlagHandle {
    done: Mutex<bool>,
    changed: Condvar,
}

impl FlagHandle {
    pub(crate) fn fire(&self) {
        *self.done.lock().unwrap() = true;
        self.changed.notify_all();
    }
}

impl CancellationHandle for FlagHandle {
    fn is_cancelled(&self) -> bool {
        *self.done.lock().unwrap()
    }

    fn wait(&self) {
        let mut done = self.done.lock().unwrap();
        while !*done {
            done = self.changed.wait(done).unwrap();
        }
    }
}

impl CancellationHandle for std::sync::Arc<FlagHandle> {
    fn is_cancelled(&self) -> bool {
        self.as_ref().is_cancelled()
    }

    fn wait(&self) {
        self.as_ref().wait()
    }
}
