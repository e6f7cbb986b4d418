//! Process-wide coordinator.
//!
//! `init` installs exactly one [`Coordinator`] for the lifetime of the
//! process. The first valid call wins; later calls are accepted and ignored.
//! Every other function fails with [`ShutdownError::NotInitialized`] until
//! then.

use crate::{
    Coordinator, CoordinatorBuilder, DrainOutcome, JobGuard, ShutdownError, ShutdownErrorResult,
};

use std::sync::{Arc, OnceLock};

static COORDINATOR: OnceLock<Arc<Coordinator>> = OnceLock::new();

/// Validate `builder` and install its coordinator if none exists yet.
///
/// Invalid arguments are reported even after a successful first call.
#[track_caller]
pub fn init(builder: CoordinatorBuilder) -> ShutdownErrorResult<()> {
    let coordinator = builder.build()?;

    if COORDINATOR.set(Arc::new(coordinator)).is_err() {
        log::debug!("shutdown coordinator already initialized, ignoring init");
    }

    Ok(())
}

pub fn is_initialized() -> bool {
    COORDINATOR.get().is_some()
}

#[track_caller]
pub fn coordinator() -> ShutdownErrorResult<Arc<Coordinator>> {
    match COORDINATOR.get() {
        Some(coordinator) => Ok(Arc::clone(coordinator)),
        None => Err(ShutdownError::not_initialized()),
    }
}

#[track_caller]
pub fn add_job() -> ShutdownErrorResult<()> {
    coordinator()?.add_job();
    Ok(())
}

#[track_caller]
pub fn done_job() -> ShutdownErrorResult<()> {
    coordinator()?.done_job();
    Ok(())
}

/// Register a job for the lifetime of the returned guard.
#[track_caller]
pub fn job() -> ShutdownErrorResult<JobGuard> {
    Ok(coordinator()?.job())
}

/// Request shutdown through the installed trigger.
#[track_caller]
pub fn cancel() -> ShutdownErrorResult<()> {
    coordinator()?.cancel();
    Ok(())
}

/// Block until shutdown is requested and all jobs are done.
#[track_caller]
pub fn stand_by() -> ShutdownErrorResult<DrainOutcome> {
    coordinator()?.stand_by()
}
