//! Tracing subscriber setup
//!
//! The level comes from `RUST_LOG` when set, otherwise from the configured
//! level. The TUI owns the terminal, so it only logs when given a file.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
    Disabled,
}

impl<'a> LogTarget<'a> {
    /// A file if one was configured, otherwise `fallback`
    #[must_use]
    pub fn file_or(log_file: Option<&'a Path>, fallback: Self) -> Self {
        log_file.map_or(fallback, LogTarget::File)
    }
}

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global subscriber
/// is already installed.
pub fn init(level: &str, target: LogTarget<'_>) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(filter(level));

    match target {
        LogTarget::Disabled => Ok(()),
        LogTarget::Stderr => builder
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!(e)),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow::anyhow!(e))
        }
    }
}

/// Quiet, idempotent subscriber for tests; set `RUST_LOG` to see output
#[cfg(test)]
pub(crate) fn init_for_tests() {
    tracing_subscriber::fmt()
        .with_env_filter(filter("warn"))
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}
