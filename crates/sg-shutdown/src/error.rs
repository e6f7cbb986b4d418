use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShutdownError {
    #[error("Invalid argument: {argument} required {location}")]
    InvalidArgument {
        argument: &'static str,
        location: ErrorLocation,
    },

    #[error("Shutdown coordinator not initialized, call init() first {location}")]
    NotInitialized { location: ErrorLocation },

    #[error("Failed to register signal handlers: {source} {location}")]
    SignalRegistration {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to spawn {thread} thread: {source} {location}")]
    ThreadSpawn {
        thread: &'static str,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl ShutdownError {
    #[track_caller]
    pub fn invalid_argument(argument: &'static str) -> Self {
        Self::InvalidArgument {
            argument,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_initialized() -> Self {
        Self::NotInitialized {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn signal_registration(source: std::io::Error) -> Self {
        Self::SignalRegistration {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn thread_spawn(thread: &'static str, source: std::io::Error) -> Self {
        Self::ThreadSpawn {
            thread,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ShutdownErrorResult<T> = std::result::Result<T, ShutdownError>;
