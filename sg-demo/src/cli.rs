use clap::{Parser, ValueEnum};

/// Runs a handful of sleeping workers and shuts down gracefully.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Number of workers; worker N sleeps N seconds
    #[arg(short, long, default_value_t = 10)]
    pub workers: u64,

    /// Seconds before shutdown is requested
    #[arg(short = 's', long, default_value_t = 2)]
    pub shutdown_after_secs: u64,

    /// How shutdown is requested
    #[arg(short, long, value_enum, default_value_t = ShutdownTrigger::Signal)]
    pub trigger: ShutdownTrigger,

    /// Make this worker panic instead of finishing
    #[arg(long)]
    pub fail_worker: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShutdownTrigger {
    /// Send SIGINT to this process
    Signal,
    /// Call the cancellation trigger directly
    Cancel,
}
