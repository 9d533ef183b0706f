use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Where log events go.
#[derive(Clone, Debug)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// Drop everything; the TUI owns the terminal.
    Discard,
}

/// Filter used when `RUST_LOG` is unset or invalid.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

pub fn init(verbosity: u8, target: LogTarget) -> Result<()> {
    let default = default_filter(verbosity);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default))
        .unwrap_or_else(|_| EnvFilter::new(default));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Discard => builder.with_writer(std::io::sink).try_init(),
    };
    if let Err(err) = installed {
        tracing::debug!(%err, "log subscriber already installed");
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/logging_tests.rs"]
mod tests;
