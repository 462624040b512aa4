//! Terminal UI for time-travel tic-tac-toe.

mod app;
mod input;
mod ui;

pub use app::{App, Focus};
pub use ui::draw;

use crate::config::AppConfig;
use crate::logging::init_file_logging;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument, warn};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive terminal UI until the user quits.
#[instrument(skip_all, fields(board_size = %config.board_size()))]
pub fn run_tui(config: &AppConfig) -> Result<()> {
    init_file_logging(config.log_file(), config.log_filter())?;

    info!("Starting terminal UI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let res = run_session(App::new(*config.board_size()));
    restore_terminal();

    if let Err(err) = &res {
        error!(error = ?err, "Terminal UI loop failed");
    }
    info!("Terminal UI stopped");

    res
}

/// Enters the alternate screen and runs the loop. Raw mode is already on.
fn run_session(app: App) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    run_app(&mut terminal, app)
}

/// Undoes raw mode, the alternate screen and the hidden cursor.
///
/// Every step runs even if an earlier one fails; failures are logged.
fn restore_terminal() {
    if let Err(err) = disable_raw_mode() {
        warn!(error = %err, "Failed to disable raw mode");
    }
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        warn!(error = %err, "Failed to leave alternate screen");
    }
}

/// Draw, wait for a key, apply it, repeat.
fn run_app(terminal: &mut Term, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, &app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
