use std::fmt;

/// The only logging capability the coordinator needs.
///
/// Implementations receive pre-formatted arguments and decide where the
/// warning goes. The coordinator never logs at any other level through it.
pub trait WarnLogger: Send + Sync {
    fn warn(&self, message: fmt::Arguments<'_>);
}

/// Forwards warnings to the `log` facade under a fixed target.
#[derive(Debug, Clone, Copy)]
pub struct LogWarner {
    target: &'static str,
}

impl LogWarner {
    pub const DEFAULT_TARGET: &'static str = "shutdown";

    pub fn new(target: &'static str) -> Self {
        Self { target }
    }
}

impl Default for LogWarner {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TARGET)
    }
}

impl WarnLogger for LogWarner {
    fn warn(&self, message: fmt::Arguments<'_>) {
        log::warn!(target: self.target, "{}", message);
    }
}
