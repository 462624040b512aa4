//! Command-line interface for timetravel_tui.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Time-travel tic-tac-toe on 3×3, 4×4 and 5×5 boards
#[derive(Parser, Debug)]
#[command(name = "timetravel_tui")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, global = true, default_value = "timetravel.toml")]
    pub config: PathBuf,

    /// Starting board size (3, 4 or 5), overrides the config file
    #[arg(short, long, global = true, value_parser = clap::value_parser!(u8).range(3..=5))]
    pub size: Option<u8>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Replay a sequence of moves and print the result
    Replay {
        /// Cell indices to play in order, comma separated (e.g. 0,4,1)
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// History step to jump to after replaying
        #[arg(short, long)]
        jump: Option<usize>,

        /// Print the game as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Returns the command to run, defaulting to [`Command::Play`].
    pub fn resolved_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }
}
