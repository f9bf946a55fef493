//! Format-time command handler

use anyhow::Result;
use stagelight::media::format_duration;

pub fn handle(seconds: f64) -> Result<()> {
    println!("{}", format_duration(seconds));
    Ok(())
}
