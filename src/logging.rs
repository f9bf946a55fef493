//! Logging setup for the binary
//!
//! The filter comes from `STAGELIGHT_LOG` (same syntax as `RUST_LOG`) and
//! defaults to `warn`. Plain commands log to stderr. The previewer owns the
//! terminal, so while it runs logs go to a file in the data directory.

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "STAGELIGHT_LOG";

/// Where log lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// `<data dir>/stagelight/stagelight.log`, truncated on start
    File,
}

/// Directory holding the log file.
pub fn log_dir() -> Result<PathBuf> {
    let dir = dirs::data_local_dir().context("Could not determine the data directory")?;
    Ok(dir.join("stagelight"))
}

fn filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy()
}

/// Install the global subscriber.
///
/// Returns the log file path when logging to a file.
pub fn init(target: LogTarget) -> Result<Option<PathBuf>> {
    match target {
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
                .with(filter())
                .try_init()
                .context("Failed to install logger")?;
            Ok(None)
        }
        LogTarget::File => {
            let dir = log_dir()?;
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let path = dir.join("stagelight.log");
            let file = File::create(&path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;

            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .with(filter())
                .try_init()
                .context("Failed to install logger")?;

            tracing::debug!("logging to {}", path.display());
            Ok(Some(path))
        }
    }
}
