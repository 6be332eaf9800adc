//! Tracing subscriber setup
//!
//! CLI commands log to stderr. The TUI owns the terminal, so it logs to a
//! file in the data directory instead.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log lines go
#[derive(Debug, Clone)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Default log file for TUI sessions
#[must_use]
pub fn default_log_file() -> PathBuf {
    crate::config::data_dir().join("word_grid.log")
}

fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }))
}

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over `verbose`. Falls back to stderr if the
/// log file cannot be opened. Calling this twice is harmless.
pub fn init(target: &LogTarget, verbose: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_target(false);

    let result = match target {
        LogTarget::File(path) => match open_log(path) {
            Ok(file) => builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init(),
            Err(e) => {
                eprintln!("Could not open log file {}: {e}", path.display());
                builder.with_writer(std::io::stderr).try_init()
            }
        },
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
    };

    // Already installed (e.g. by a test harness)
    drop(result);
}

fn open_log(path: &Path) -> std::io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
