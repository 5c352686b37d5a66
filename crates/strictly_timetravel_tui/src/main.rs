//! Strictly Timetravel - terminal entry point.

use anyhow::Result;
use clap::Parser;
use strictly_timetravel_tui::{Cli, Command, TuiConfig, init_file_logging, render, replay, run_tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(cli.config.as_deref())?;

    let log_file = cli.log_file.clone().unwrap_or_else(|| config.log_file().clone());
    init_file_logging(&log_file, config.log_filter())?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_tui(&config),
        Command::Replay { moves, jump, json } => {
            info!(?moves, ?jump, "Replaying moves");
            let report = replay(&moves, jump);
            print!("{}", render(&report, json)?);
            Ok(())
        }
    }
}
