//! Graceful shutdown for thread-based programs.
//!
//! Workers register themselves while they run, a listener turns SIGINT,
//! SIGTERM, SIGQUIT or an explicit cancellation into a single "done" state,
//! and the main thread blocks in `stand_by` until no job is left.
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use sg_shutdown::{LogWarner, global};
//! use tokio_util::sync::CancellationToken;
//!
//! fn main() -> Result<(), sg_shutdown::ShutdownError> {
//!     let token = CancellationToken::new();
//!     global::init(
//!         sg_shutdown::Coordinator::builder()
//!             .token(token.clone())
//!             .logger(Arc::new(LogWarner::default())),
//!     )?;
//!
//!     for id in 0..4 {
//!         let job = global::job()?;
//!         std::thread::spawn(move || {
//!             let _job = job;
//!             std::thread::sleep(Duration::from_secs(id));
//!         });
//!     }
//!
//!     global::stand_by()?;
//!     Ok(())
//! }
//! ```

pub mod cancellation;
pub mod coordinator;
pub mod coordinator_builder;
pub mod drain_outcome;
pub mod error;
pub mod global;
pub mod job_guard;
mod signal_listener;
pub mod warn_logger;

pub use cancellation::{CancellationHandle, Trigger, token_trigger};
pub use coordinator::Coordinator;
pub use coordinator_builder::CoordinatorBuilder;
pub use drain_outcome::DrainOutcome;
pub use error::{ShutdownError, ShutdownErrorResult};
pub use job_guard::JobGuard;
pub use warn_logger::{LogWarner, WarnLogger};

#[cfg(test)]
mod tests;
