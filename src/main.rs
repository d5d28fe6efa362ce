//! playbar command line entry point.

mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use playbar::cli::{Cli, Commands, ConfigCommands};
use playbar::logging::{self, LogTarget};
use playbar::theme::current_theme;

use commands::play::PlayArgs;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if !matches!(cli.command, Commands::Play { .. }) {
        if let Err(e) = logging::init(LogTarget::Stderr) {
            eprintln!("warning: {e}");
        }
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", current_theme().error_text(&format!("Error: {e:#}")));
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Play {
            duration,
            unknown_duration,
            hide_seek_time,
            sound,
            block_autoplay,
        } => commands::play::handle(PlayArgs {
            duration,
            unknown_duration,
            hide_seek_time,
            sound,
            block_autoplay,
        }),
        Commands::FormatTime { seconds } => commands::format_time::handle(&seconds),
        Commands::StripAccents { text } => commands::strip_accents::handle(&text),
        Commands::Share {
            url,
            title,
            provider,
        } => commands::share::handle(&url, title.as_deref(), provider.as_deref()),
        Commands::Copy { text } => commands::copy::handle(&text),
        Commands::Config(ConfigCommands::Show) => commands::config::handle_show(),
        Commands::Config(ConfigCommands::Path) => commands::config::handle_path(),
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
