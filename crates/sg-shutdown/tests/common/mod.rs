#![allow(dead_code)]

use std::fmt;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use sg_shutdown::WarnLogger;

pub const CONTEXT_CANCELED: &str = "something cause context canceled";
pub const GRACEFUL_SHUTDOWN: &str = ">>>>  graceful shutdown  <<<<";
pub const WAITING_SUFFIX: &str = "jobs waiting to stop";

/// Warn-only logger that remembers everything it was given
#[derive(Default)]
pub struct RecordingLogger {
    messages: Mutex<Vec<String>>,
}

impl RecordingLogger {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn contains(&self, message: &str) -> bool {
        self.messages().iter().any(|m| m == message)
    }

    pub fn count_waiting(&self) -> usize {
        self.messages()
            .iter()
            .filter(|m| m.ends_with(WAITING_SUFFIX))
            .count()
    }

    pub fn wait_for(&self, message: &str, timeout: Duration) -> bool {
        let started = Instant::now();
        while started.elapsed() < timeout {
            if self.contains(message) {
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

/// Cause first, then only progress lines, then the final notice
pub fn assert_shutdown_shape(messages: &[String], cause: &str) {
    assert!(messages.len() >= 3, "{:?}", messages);
    assert_eq!(messages.first().map(String::as_str), Some(cause), "{:?}", messages);
    assert_eq!(
        messages.last().map(String::as_str),
        Some(GRACEFUL_SHUTDOWN),
        "{:?}",
        messages
    );
    assert!(
        messages[1..messages.len() - 1]
            .iter()
            .all(|m| m.ends_with(WAITING_SUFFIX)),
        "{:?}",
        messages
    );
}
