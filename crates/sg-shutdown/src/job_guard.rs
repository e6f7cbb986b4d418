use crate::Coordinator;

use std::sync::Arc;

/// Keeps one job registered for as long as it is alive.
///
/// Dropping the guard deregisters the job, also when the owning thread
/// unwinds from a panic.
#[must_use = "the job is deregistered as soon as the guard is dropped"]
pub struct JobGuard {
    coordinator: Arc<Coordinator>,
}

impl JobGuard {
    pub fn new(coordinator: Arc<Coordinator>) -> Self {
        coordinator.add_job();
        Self { coordinator }
    }
}

impl Drop for JobGuard {
    fn drop(&mut self) {
        self.coordinator.done_job();
    }
}
