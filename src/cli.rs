//! Command-line interface definitions
//!
//! Lives in the library so xtask can generate man pages from the same
//! definitions the binary parses.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::widgets::MonthCursor;

#[derive(Parser, Debug)]
#[command(name = "stagelight")]
#[command(author, version, about = "Preview and inspect the stagelight promo page widgets")]
#[command(long_about = "Preview and inspect the stagelight promo page widgets.

Runs an interactive terminal preview of the page by default: audio
previews with exclusive playback, the booking calendar, slideshows,
the contact form and the gallery lightbox.

Set STAGELIGHT_LOG (e.g. STAGELIGHT_LOG=debug) to control logging.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive terminal preview (default)
    Preview {
        /// Page configuration to use instead of the default location
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,
    },

    /// Print the booking calendar for a month
    #[command(long_about = "Print the booking calendar for a month.

Days are marked booked (x), pending (?) or available. Defaults to the
current month.

EXAMPLES:
    stagelight calendar
    stagelight calendar --month 2026-10
    stagelight calendar --month 2026-10 --json")]
    Calendar {
        /// Month to show, as YYYY-MM
        #[arg(short, long, value_name = "YYYY-MM", value_parser = parse_month)]
        month: Option<MonthCursor>,

        /// Print the grid as JSON
        #[arg(long)]
        json: bool,

        /// Page configuration to read availability from
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,
    },

    /// Format seconds the way the audio players display them (M:SS)
    FormatTime {
        /// Time in seconds
        #[arg(allow_negative_numbers = true)]
        seconds: f64,
    },

    /// Manage the page configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show {
        /// Configuration file to read instead of the default location
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,
    },

    /// Print the default configuration file location
    Path,

    /// Write the built-in demo page to the configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Parse `YYYY-MM` into the month it names.
pub fn parse_month(s: &str) -> Result<MonthCursor, String> {
    let date = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
        .map_err(|_| format!("invalid month '{s}', expected YYYY-MM"))?;
    Ok(MonthCursor::containing(date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_month_accepts_year_month() {
        let cursor = parse_month("2026-10").unwrap();
        assert_eq!(cursor.year(), 2026);
        assert_eq!(cursor.month(), 10);
    }

    #[test]
    fn parse_month_rejects_garbage() {
        assert!(parse_month("2026-13").is_err());
        assert!(parse_month("October").is_err());
        assert!(parse_month("").is_err());
    }

    #[test]
    fn no_subcommand_means_preview() {
        let cli = Cli::try_parse_from(["stagelight"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn format_time_accepts_negative_seconds() {
        let cli = Cli::try_parse_from(["stagelight", "format-time", "-5"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::FormatTime { seconds }) if seconds == -5.0
        ));
    }
}
