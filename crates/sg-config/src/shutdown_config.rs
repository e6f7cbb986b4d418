use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

// Drain polling constraints
pub const MIN_POLL_INTERVAL_MS: u64 = 10;
pub const MAX_POLL_INTERVAL_MS: u64 = 60_000;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

// 0 disables the deadline
pub const MAX_DRAIN_DEADLINE_SECS: u64 = 86_400;
pub const DEFAULT_DRAIN_DEADLINE_SECS: u64 = 0;

/// Drain behavior once shutdown has been requested.
///
/// The default waits forever for in-flight jobs, checking every 500ms.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShutdownConfig {
    /// Delay between two checks of the active job count
    pub poll_interval_ms: u64,
    /// Give up waiting after this many seconds (0 = wait forever)
    pub drain_deadline_secs: u64,
}

impl Default for ShutdownConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            drain_deadline_secs: DEFAULT_DRAIN_DEADLINE_SECS,
        }
    }
}

impl ShutdownConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.poll_interval_ms < MIN_POLL_INTERVAL_MS
            || self.poll_interval_ms > MAX_POLL_INTERVAL_MS
        {
            return Err(ConfigError::shutdown(format!(
                "shutdown.poll_interval_ms must be {}-{}, got {}",
                MIN_POLL_INTERVAL_MS, MAX_POLL_INTERVAL_MS, self.poll_interval_ms
            )));
        }

        if self.drain_deadline_secs > MAX_DRAIN_DEADLINE_SECS {
            return Err(ConfigError::shutdown(format!(
                "shutdown.drain_deadline_secs must be 0-{}, got {}",
                MAX_DRAIN_DEADLINE_SECS, self.drain_deadline_secs
            )));
        }

        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn drain_deadline(&self) -> Option<Duration> {
        match self.drain_deadline_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}
