//! Error types for game transitions.

use crate::types::Player;
use derive_more::{Display, Error};
use tracing::instrument;

/// The reason a transition was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GameErrorKind {
    /// The target cell already holds a mark.
    #[display("Square {} is already occupied", index)]
    SquareOccupied {
        /// Cell index that was targeted.
        index: usize,
    },

    /// The current snapshot already has a winner.
    #[display("Game is already over, {} won", winner)]
    GameOver {
        /// Player holding a complete line.
        winner: Player,
    },

    /// The cell index lies outside the board.
    #[display("Cell {} is out of bounds (board has {} cells)", index, cells)]
    CellOutOfBounds {
        /// Cell index that was targeted.
        index: usize,
        /// Number of cells on the board.
        cells: usize,
    },

    /// The history step does not exist.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Current history length.
        len: usize,
    },

    /// A deserialized history breaks the game invariants.
    #[display("History is invalid ({} invariant violations)", violations)]
    InvalidHistory {
        /// Number of violated invariants.
        violations: usize,
    },

    /// Only 3×3, 4×4 and 5×5 boards are supported.
    #[display("Unsupported board size {}, expected 3, 4 or 5", _0)]
    UnsupportedBoardSize(usize),
}

/// Game error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Game error: {} at {}:{}", kind, file, line)]
pub struct GameError {
    /// What went wrong.
    pub kind: GameErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new game error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: GameErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> GameErrorKind {
        self.kind
    }
}
