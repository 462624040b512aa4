//! Headless replay of a move sequence.

use crate::view::{history_labels, status_text};
use serde::Serialize;
use timetravel_tictactoe::{BoardSize, Game, GameError, Move};
use tracing::{info, instrument};

/// Everything the `replay` command prints.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// The resulting game, full history included.
    pub game: Game,
    /// Status line for the current step.
    pub status: String,
    /// Labels of the stored history entries.
    pub history: Vec<String>,
    /// Moves recorded in the stored history.
    pub moves: Vec<Move>,
}

impl ReplayReport {
    /// Builds the report for a game.
    pub fn new(game: Game) -> Self {
        Self {
            status: status_text(&game),
            history: history_labels(&game),
            moves: game.moves(),
            game,
        }
    }

    /// Renders the report as plain text.
    pub fn to_text(&self) -> String {
        let step = self.game.step();
        let history = self
            .history
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let marker = if i == step { ">" } else { " " };
                format!("{} {}. {}", marker, i + 1, label)
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "{}\n\n{}\n\n{}",
            self.game.current_snapshot().display(),
            self.status,
            history
        )
    }
}

/// Replays `moves` on a fresh board, then optionally jumps to `jump`.
///
/// # Errors
///
/// Returns the first rejected move or an out-of-range jump.
#[instrument(skip(moves), fields(size = %size, moves = moves.len()))]
pub fn run_replay(
    size: BoardSize,
    moves: &[usize],
    jump: Option<usize>,
) -> Result<ReplayReport, GameError> {
    let game = Game::replay(size, moves)?;
    let game = match jump {
        Some(step) => game.jump_to(step)?,
        None => game,
    };

    info!(step = game.step(), history = game.history_length(), "Replay finished");
    Ok(ReplayReport::new(game))
}
