//! Command handlers for the stagelight binary

pub mod calendar;
pub mod completions;
pub mod config;
pub mod format_time;
pub mod preview;

use std::path::Path;

use anyhow::{Context, Result};
use stagelight::Config;

/// Load the configuration from `path`, or from the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Config::load().context("Failed to load config"),
    }
}
