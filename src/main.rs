//! stagelight CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use stagelight::cli::{Cli, Commands, ConfigCommands};
use stagelight::logging::{self, LogTarget};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Preview { config: None });

    // The previewer owns the terminal, so its logs go to a file
    let target = match command {
        Commands::Preview { .. } => LogTarget::File,
        _ => LogTarget::Stderr,
    };
    if let Err(err) = logging::init(target) {
        eprintln!("Warning: logging disabled: {err:#}");
    }

    match command {
        Commands::Preview { config } => commands::preview::handle(config.as_deref()),
        Commands::Calendar {
            month,
            json,
            config,
        } => commands::calendar::handle(month, json, config.as_deref()),
        Commands::FormatTime { seconds } => commands::format_time::handle(seconds),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show { config } => commands::config::handle_show(config.as_deref()),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init { force } => commands::config::handle_init(force),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
