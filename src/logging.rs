//! Diagnostic logging through `tracing`.
//!
//! The design pipeline emits `debug!` events for the chosen order and stage
//! results and `trace!` events for intermediate roots. Output goes to stderr
//! so filtered samples on stdout stay machine-readable.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Log level configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level (roots at every stage)
    Trace,
    /// Debug level (order, cutoff and stage summaries)
    Debug,
    Info,
    /// Warning level (default)
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Warn
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

/// Filter directive for `level`, unless `RUST_LOG` is set
fn build_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()))
}

/// Initialize the global logging subscriber.
///
/// Should be called once at startup; later calls are ignored.
pub fn init_logging(level: LogLevel) {
    // Err only when a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
