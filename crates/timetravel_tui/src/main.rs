//! Time-travel tic-tac-toe - terminal front end.

use anyhow::{Context, Result};
use clap::Parser;
use timetravel_tui::{AppConfig, Cli, Command, init_stderr_logging, run_replay, run_tui};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)?.with_size_override(cli.size)?;

    match cli.resolved_command() {
        Command::Play => run_tui(&config),
        Command::Replay { moves, jump, json } => {
            init_stderr_logging(config.log_filter());

            let report = run_replay(*config.board_size(), &moves, jump)?;
            if json {
                let out = serde_json::to_string_pretty(&report).context("Failed to encode replay")?;
                println!("{}", out);
            } else {
                println!("{}", report.to_text());
            }
            Ok(())
        }
    }
}
