//! Preview command handler

use std::path::Path;

use anyhow::Result;
use chrono::Local;

use super::load_config;

/// Run the terminal previewer.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    stagelight::tui::run(&config, Local::now().date_naive())
}
