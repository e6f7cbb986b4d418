mod config;
mod error;
mod log_level;
mod logging_config;
mod shutdown_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use shutdown_config::{
    DEFAULT_DRAIN_DEADLINE_SECS, DEFAULT_POLL_INTERVAL_MS, MAX_DRAIN_DEADLINE_SECS,
    MAX_POLL_INTERVAL_MS, MIN_POLL_INTERVAL_MS, ShutdownConfig,
};

const CONFIG_DIR_ENV: &str = "SG_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".sg";
const CONFIG_FILENAME: &str = "config.toml";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
