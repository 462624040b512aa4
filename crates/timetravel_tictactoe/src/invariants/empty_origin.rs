//! Empty origin invariant: history starts from a blank board.

use super::Invariant;
use crate::Game;

/// Invariant: The first snapshot is empty and sized for the game's board.
pub struct EmptyOriginInvariant;

impl Invariant<Game> for EmptyOriginInvariant {
    fn holds(game: &Game) -> bool {
        game.history().first().is_some_and(|origin| {
            origin.size() == game.board_size() && origin.occupied() == 0
        })
    }

    fn description() -> &'static str {
        "History starts with an empty board of the game's size"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardSize, Player, Square};

    #[test]
    fn test_new_game_holds() {
        assert!(EmptyOriginInvariant::holds(&Game::new(BoardSize::Five)));
    }

    #[test]
    fn test_marked_origin_violates() {
        let mut game = Game::default();
        game.history[0].set(2, Square::Occupied(Player::X)).unwrap();
        assert!(!EmptyOriginInvariant::holds(&game));
    }

    #[test]
    fn test_empty_history_violates() {
        let mut game = Game::default();
        game.history.clear();
        assert!(!EmptyOriginInvariant::holds(&game));
    }
}
