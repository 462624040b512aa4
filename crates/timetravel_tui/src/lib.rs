//! Terminal front end for time-travel tic-tac-toe.
//!
//! # Architecture
//!
//! - **CLI**: `play` (interactive) and `replay` (headless) commands
//! - **Config**: TOML settings for the starting board size and logging
//! - **View**: pure status and label text shared by both commands
//! - **TUI**: ratatui rendering and keyboard handling over a [`Game`]
//!
//! [`Game`]: timetravel_tictactoe::Game

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod replay;
mod tui;
mod view;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError};
pub use logging::{init_file_logging, init_stderr_logging};
pub use replay::{ReplayReport, run_replay};
pub use tui::{App, Focus, draw, run_tui};
pub use view::{history_label, history_labels, size_labels, status_text};
