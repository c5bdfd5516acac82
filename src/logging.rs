//! Logging setup
//!
//! Installs a `tracing-subscriber` fmt subscriber filtered by `RUST_LOG`
//! (default `balance_history=info`). Command line runs log to stderr; the
//! TUI logs to a file so the alternate screen is left alone.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{HistoryError, HistoryResult};

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "balance_history=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn install_error(err: impl std::fmt::Display) -> HistoryError {
    HistoryError::Config(format!("Failed to install logger: {}", err))
}

/// Log to stderr
pub fn init_stderr() -> HistoryResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(install_error)
}

/// Append logs to `path`
pub fn init_file(path: &Path) -> HistoryResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| HistoryError::Io(format!("Failed to open log file {}: {}", path.display(), e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(install_error)
}
