//! Core domain types for tic-tac-toe.

use crate::error::{GameError, GameErrorKind};
use crate::lines::{Line, lines_for};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the player to move at the given history step.
    ///
    /// X moves on even steps, O on odd ones.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Player::X } else { Player::O }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// Supported board sizes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(try_from = "usize", into = "usize")]
pub enum BoardSize {
    /// 3×3 board.
    #[default]
    #[display("3x3")]
    Three,
    /// 4×4 board.
    #[display("4x4")]
    Four,
    /// 5×5 board.
    #[display("5x5")]
    Five,
}

impl BoardSize {
    /// Side length of the board.
    pub fn side(self) -> usize {
        match self {
            BoardSize::Three => 3,
            BoardSize::Four => 4,
            BoardSize::Five => 5,
        }
    }

    /// Number of cells on the board.
    pub fn cells(self) -> usize {
        self.side() * self.side()
    }

    /// Winning lines for this size, generated once per process.
    pub fn lines(self) -> &'static [Line] {
        static THREE: OnceLock<Vec<Line>> = OnceLock::new();
        static FOUR: OnceLock<Vec<Line>> = OnceLock::new();
        static FIVE: OnceLock<Vec<Line>> = OnceLock::new();

        let cell = match self {
            BoardSize::Three => &THREE,
            BoardSize::Four => &FOUR,
            BoardSize::Five => &FIVE,
        };
        cell.get_or_init(|| lines_for(self.side()))
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = GameError;

    #[track_caller]
    fn try_from(side: usize) -> Result<Self, Self::Error> {
        match side {
            3 => Ok(BoardSize::Three),
            4 => Ok(BoardSize::Four),
            5 => Ok(BoardSize::Five),
            other => Err(GameError::new(GameErrorKind::UnsupportedBoardSize(other))),
        }
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.side()
    }
}

/// One board snapshot: N² squares in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    size: BoardSize,
    squares: Vec<Square>,
}

/// Unchecked wire form of a [`Board`].
#[derive(Deserialize)]
struct BoardRepr {
    size: BoardSize,
    squares: Vec<Square>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = GameError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        let board = Self::from_squares(repr.squares)?;
        if board.size != repr.size {
            return Err(GameError::new(GameErrorKind::UnsupportedBoardSize(
                board.squares.len(),
            )));
        }
        Ok(board)
    }
}

impl Board {
    /// Creates an empty board of the given size.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size.cells()],
        }
    }

    /// Builds a board from squares in row-major order.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedBoardSize` if the square count is not 9, 16 or 25.
    #[track_caller]
    pub fn from_squares(squares: Vec<Square>) -> Result<Self, GameError> {
        let size = BoardSize::try_from(squares.len().isqrt())
            .ok()
            .filter(|size| size.cells() == squares.len())
            .ok_or_else(|| GameError::new(GameErrorKind::UnsupportedBoardSize(squares.len())))?;
        Ok(Self { size, squares })
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Gets the square at the given index.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Sets the square at the given index.
    ///
    /// # Errors
    ///
    /// Returns `CellOutOfBounds` if the index lies outside the board.
    #[track_caller]
    pub fn set(&mut self, index: usize, square: Square) -> Result<(), GameError> {
        let cells = self.squares.len();
        let slot = self
            .squares
            .get_mut(index)
            .ok_or_else(|| GameError::new(GameErrorKind::CellOutOfBounds { index, cells }))?;
        *slot = square;
        Ok(())
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Iterates over the rows of the board.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(self.size.side())
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based index.
    pub fn display(&self) -> String {
        let side = self.size.side();
        let width = self.squares.len().to_string().len();
        let separator = vec!["-".repeat(width); side].join("+");

        self.rows()
            .enumerate()
            .map(|(row, squares)| {
                squares
                    .iter()
                    .enumerate()
                    .map(|(col, square)| match square {
                        Square::Empty => format!("{:>width$}", row * side + col + 1),
                        Square::Occupied(player) => format!("{:>width$}", player.to_string()),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join(&format!("\n{}\n", separator))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}
