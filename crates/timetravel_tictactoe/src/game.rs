//! History-backed game state machine.
//!
//! A [`Game`] owns the ordered snapshots of one board, the step pointer
//! selecting the current snapshot, and the board size. Transitions borrow
//! the game and return the next value, so a rejected transition leaves the
//! caller's game exactly as it was.

use crate::error::{GameError, GameErrorKind};
use crate::invariants::{GameInvariants, InvariantSet};
use crate::rules;
use crate::types::{Board, BoardSize, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// A recorded move: the player and the cell they marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The cell index that was marked.
    pub index: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.index)
    }
}

/// Game with move history and time travel.
///
/// The active player is never stored; it is derived from the parity of
/// the step pointer. Deserialization rejects any history that breaks
/// [`GameInvariants`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameRepr")]
pub struct Game {
    pub(crate) size: BoardSize,
    pub(crate) history: Vec<Board>,
    pub(crate) step: usize,
}

/// Unchecked wire form of a [`Game`].
#[derive(Deserialize)]
struct GameRepr {
    size: BoardSize,
    history: Vec<Board>,
    step: usize,
}

impl TryFrom<GameRepr> for Game {
    type Error = GameError;

    fn try_from(repr: GameRepr) -> Result<Self, Self::Error> {
        let game = Self {
            size: repr.size,
            history: repr.history,
            step: repr.step,
        };
        GameInvariants::check_all(&game).map_err(|violations| {
            for violation in &violations {
                warn!(%violation, "Rejecting deserialized game");
            }
            GameError::new(GameErrorKind::InvalidHistory {
                violations: violations.len(),
            })
        })?;
        Ok(game)
    }
}

impl Game {
    /// Creates a new game with a single empty snapshot.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            history: vec![Board::new(size)],
            step: 0,
        }
    }

    /// Builds a game by playing the given cell indices in order.
    ///
    /// # Errors
    ///
    /// Returns the first rejection encountered.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(size: BoardSize, moves: &[usize]) -> Result<Self, GameError> {
        moves
            .iter()
            .try_fold(Self::new(size), |game, &index| game.apply_move(index))
    }

    /// Returns the snapshot selected by the step pointer.
    pub fn current_snapshot(&self) -> &Board {
        &self.history[self.step]
    }

    /// Returns the board size.
    pub fn board_size(&self) -> BoardSize {
        self.size
    }

    /// Returns the player whose turn it is at the current step.
    pub fn active_player(&self) -> Player {
        Player::for_step(self.step)
    }

    /// Returns the winner on the current snapshot, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::evaluate(self.current_snapshot())
    }

    /// Returns the number of stored snapshots, including unreachable
    /// future entries left behind by a jump.
    pub fn history_length(&self) -> usize {
        self.history.len()
    }

    /// Returns all stored snapshots.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the step pointer.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the moves that lead from one snapshot to the next.
    ///
    /// Entry `k` is the move that produced snapshot `k + 1`.
    pub fn moves(&self) -> Vec<Move> {
        self.history
            .windows(2)
            .filter_map(|pair| {
                pair[0]
                    .squares()
                    .iter()
                    .zip(pair[1].squares())
                    .enumerate()
                    .find_map(|(index, (before, after))| match (before, after) {
                        (Square::Empty, Square::Occupied(player)) => Some(Move {
                            player: *player,
                            index,
                        }),
                        _ => None,
                    })
            })
            .collect()
    }

    /// Marks a cell for the active player.
    ///
    /// Any stored snapshots after the current step are discarded before the
    /// new snapshot is appended.
    ///
    /// # Errors
    ///
    /// - `CellOutOfBounds` if the index lies outside the board
    /// - `GameOver` if the current snapshot already has a winner
    /// - `SquareOccupied` if the cell holds a mark
    #[instrument(skip(self), fields(step = self.step, player = %self.active_player()))]
    pub fn apply_move(&self, index: usize) -> Result<Self, GameError> {
        let current = self.current_snapshot();

        if index >= current.squares().len() {
            return Err(GameError::new(GameErrorKind::CellOutOfBounds {
                index,
                cells: current.squares().len(),
            }));
        }

        if let Some(winner) = self.winner() {
            debug!(?winner, "Move rejected, game already won");
            return Err(GameError::new(GameErrorKind::GameOver { winner }));
        }

        if !current.is_empty(index) {
            debug!("Move rejected, square occupied");
            return Err(GameError::new(GameErrorKind::SquareOccupied { index }));
        }

        let mut next = current.clone();
        next.set(index, Square::Occupied(self.active_player()))?;

        let mut history = self.history[..=self.step].to_vec();
        history.push(next);
        let game = Self {
            size: self.size,
            step: history.len() - 1,
            history,
        };

        debug!(
            discarded = self.history.len() - self.step - 1,
            step = game.step,
            "Move applied"
        );
        debug_assert!(
            GameInvariants::check_all(&game).is_ok(),
            "Game invariants violated after move"
        );

        Ok(game)
    }

    /// Moves the step pointer to a stored snapshot.
    ///
    /// Stored history is kept; entries after `step` stay until the next
    /// move overwrites them.
    ///
    /// # Errors
    ///
    /// Returns `StepOutOfRange` if `step` is not a stored snapshot.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&self, step: usize) -> Result<Self, GameError> {
        let len = self.history.len();
        if step >= len {
            debug!(len, "Jump rejected");
            return Err(GameError::new(GameErrorKind::StepOutOfRange { step, len }));
        }

        debug!("Jumped");
        Ok(Self {
            size: self.size,
            history: self.history.clone(),
            step,
        })
    }

    /// Starts over on a board of the given size, discarding all history.
    #[instrument(skip(self), fields(from = %self.size))]
    pub fn set_board_config(&self, size: BoardSize) -> Self {
        debug!(discarded = self.history.len(), "Board reset");
        Self::new(size)
    }

    /// Checks whether the current snapshot is full with no winner.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(self.current_snapshot())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn top_row_win() -> Game {
        Game::replay(BoardSize::Three, &[0, 4, 1, 5, 2]).unwrap()
    }

    #[test]
    fn test_new_game() {
        let game = Game::new(BoardSize::Four);
        assert_eq!(game.history_length(), 1);
        assert_eq!(game.step(), 0);
        assert_eq!(game.active_player(), Player::X);
        assert_eq!(game.current_snapshot().squares().len(), 16);
    }

    #[test]
    fn test_apply_move_alternates() {
        let game = Game::default().apply_move(4).unwrap();
        assert_eq!(game.active_player(), Player::O);
        assert_eq!(
            game.current_snapshot().get(4),
            Some(Square::Occupied(Player::X))
        );
        let game = game.apply_move(0).unwrap();
        assert_eq!(
            game.current_snapshot().get(0),
            Some(Square::Occupied(Player::O))
        );
        assert_eq!(game.active_player(), Player::X);
    }

    #[test]
    fn test_occupied_rejection_leaves_game_untouched() {
        let game = Game::default().apply_move(4).unwrap();
        let before = game.clone();
        for _ in 0..2 {
            let err = game.apply_move(4).unwrap_err();
            assert_eq!(err.kind(), GameErrorKind::SquareOccupied { index: 4 });
        }
        assert_eq!(game, before);
    }

    #[test]
    fn test_out_of_bounds_move() {
        let err = Game::default().apply_move(9).unwrap_err();
        assert_eq!(
            err.kind(),
            GameErrorKind::CellOutOfBounds { index: 9, cells: 9 }
        );
    }

    #[test]
    fn test_move_after_win_rejected() {
        let game = top_row_win();
        assert_eq!(game.winner(), Some(Player::X));
        let err = game.apply_move(8).unwrap_err();
        assert_eq!(
            err.kind(),
            GameErrorKind::GameOver { winner: Player::X }
        );
        assert_eq!(game.history_length(), 6);
    }

    #[test]
    fn test_jump_keeps_history() {
        let game = top_row_win().jump_to(2).unwrap();
        assert_eq!(game.step(), 2);
        assert_eq!(game.history_length(), 6);
        assert_eq!(game.active_player(), Player::X);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_jump_out_of_range() {
        let err = top_row_win().jump_to(6).unwrap_err();
        assert_eq!(
            err.kind(),
            GameErrorKind::StepOutOfRange { step: 6, len: 6 }
        );
    }

    #[test]
    fn test_move_after_jump_truncates_future() {
        let game = top_row_win().jump_to(2).unwrap().apply_move(8).unwrap();
        assert_eq!(game.history_length(), 4);
        assert_eq!(game.step(), 3);
        assert_eq!(
            game.moves(),
            vec![
                Move { player: Player::X, index: 0 },
                Move { player: Player::O, index: 4 },
                Move { player: Player::X, index: 8 },
            ]
        );
    }

    #[test]
    fn test_set_board_config_resets() {
        let game = top_row_win().set_board_config(BoardSize::Five);
        assert_eq!(game, Game::new(BoardSize::Five));
        assert_eq!(game.current_snapshot().occupied(), 0);
    }

    #[test]
    fn test_draw_still_reports_next_player() {
        // X O X / X O O / O X X
        let game = Game::replay(BoardSize::Three, &[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();
        assert!(game.is_draw());
        assert_eq!(game.winner(), None);
        assert_eq!(game.active_player(), Player::O);
    }
}
