//! Calendar command handler

use std::path::Path;

use anyhow::Result;
use chrono::Local;
use stagelight::widgets::MonthCursor;

use super::load_config;

/// Print the month grid for `month` (default: the current month).
pub fn handle(month: Option<MonthCursor>, json: bool, config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    let cursor = month.unwrap_or_else(|| MonthCursor::containing(Local::now().date_naive()));
    let grid = cursor.render(&config.calendar);

    if json {
        println!("{}", serde_json::to_string_pretty(&grid)?);
    } else {
        print!("{}", grid.to_text());
    }
    Ok(())
}
