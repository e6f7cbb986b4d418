mod cli;
mod error;
mod logger;

#[cfg(test)]
mod tests;

use crate::cli::{Cli, ShutdownTrigger};
use crate::error::{DemoError, Result};

use std::any::Any;
use std::panic;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use clap::Parser;
use log::{error, info, warn};
use sg_shutdown::{Coordinator, DrainOutcome, LogWarner, global};
use tokio_util::sync::CancellationToken;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = sg_config::Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(ref path) = log_file_path
        && let Some(dir) = path.parent()
    {
        std::fs::create_dir_all(dir).map_err(|e| DemoError::Io {
            action: format!("create log directory {}", dir.display()),
            source: e,
        })?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;
    logger::install_panic_hook();

    info!("Starting sg-demo v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    global::init(
        Coordinator::builder()
            .token(CancellationToken::new())
            .logger(Arc::new(LogWarner::default()))
            .with_config(&config.shutdown),
    )?;

    for id in 0..cli.workers {
        spawn_worker(id, cli.fail_worker == Some(id))?;
    }

    request_shutdown_after(Duration::from_secs(cli.shutdown_after_secs), cli.trigger)?;

    match global::stand_by()? {
        DrainOutcome::Completed => info!("All workers finished, exiting"),
        DrainOutcome::DeadlineExceeded { remaining } => {
            warn!("Exiting with {} workers still running", remaining)
        }
    }

    Ok(())
}

/// Worker `id` sleeps `id` seconds inside a registered job.
fn spawn_worker(id: u64, fail: bool) -> Result<()> {
    let job = global::job()?;

    thread::Builder::new()
        .name(format!("worker-{id}"))
        .spawn(move || {
            let _job = job;

            let outcome = panic::catch_unwind(move || {
                thread::sleep(Duration::from_secs(id));
                if fail {
                    panic!("worker {id} gave up");
                }
                info!("{} over", id);
            });

            // The panic itself was already logged by the hook
            if outcome.is_err() {
                warn!("worker {} stopped before finishing", id);
            }
        })
        .map_err(|e| DemoError::Io {
            action: format!("spawn worker {id}"),
            source: e,
        })?;

    Ok(())
}

fn request_shutdown_after(delay: Duration, trigger: ShutdownTrigger) -> Result<()> {
    thread::Builder::new()
        .name("shutdown-requester".into())
        .spawn(move || {
            thread::sleep(delay);
            match trigger {
                ShutdownTrigger::Signal => send_interrupt(),
                ShutdownTrigger::Cancel => {
                    if let Err(e) = global::cancel() {
                        error!("Failed to cancel: {}", e);
                    }
                }
            }
        })
        .map_err(|e| DemoError::Io {
            action: String::from("spawn shutdown requester"),
            source: e,
        })?;

    Ok(())
}

#[cfg(unix)]
fn send_interrupt() {
    use nix::sys::signal::{Signal, kill};
    use nix::unistd::Pid;

    if let Err(e) = kill(Pid::this(), Signal::SIGINT) {
        error!("Failed to send SIGINT: {}", e);
    }
}

#[cfg(not(unix))]
fn send_interrupt() {
    warn!("Signals are not supported here, cancelling instead");
    if let Err(e) = global::cancel() {
        error!("Failed to cancel: {}", e);
    }
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}
