//! Win detection logic.

use crate::lines::Line;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// Finds the first winning line on the board and the player holding it.
///
/// Lines are scanned rows, columns, then diagonals.
#[instrument(skip(board), fields(size = %board.size()))]
pub fn winning_line(board: &Board) -> Option<(Player, &'static Line)> {
    board.size().lines().iter().find_map(|line| {
        let mut cells = line.cells().iter().map(|&i| board.get(i));
        match cells.next()? {
            Some(Square::Occupied(player))
                if cells.all(|sq| sq == Some(Square::Occupied(player))) =>
            {
                Some((player, line))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player holds a complete line,
/// `None` otherwise, including on a full board with no line.
#[instrument(skip(board), fields(size = %board.size()))]
pub fn evaluate(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}
