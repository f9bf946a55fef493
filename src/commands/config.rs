//! Config subcommands handler

use std::path::Path;

use anyhow::{bail, Result};
use stagelight::tui::current_theme;
use stagelight::Config;

use super::load_config;

/// Show the effective configuration as TOML.
pub fn handle_show(path: Option<&Path>) -> Result<()> {
    let config = load_config(path)?;
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Print where the configuration is read from.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write the built-in demo page to the default location.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn handle_init(force: bool) -> Result<()> {
    let path = Config::config_path()?;
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(&path)?;
    let theme = current_theme();
    println!(
        "{}",
        theme.success_text(&format!("Wrote {}", path.display()))
    );
    Ok(())
}
