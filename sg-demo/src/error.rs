use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Config error: {0}")]
    Config(#[from] sg_config::ConfigError),

    #[error("Shutdown error: {0}")]
    Shutdown(#[from] sg_shutdown::ShutdownError),

    #[error("Failed to {action}: {source}")]
    Io {
        action: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, DemoError>;
