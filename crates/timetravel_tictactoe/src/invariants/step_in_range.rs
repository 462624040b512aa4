//! Step pointer invariant.

use super::Invariant;
use crate::Game;

/// Invariant: The step pointer selects a stored snapshot and every snapshot
/// matches the game's board size.
pub struct StepInRangeInvariant;

impl Invariant<Game> for StepInRangeInvariant {
    fn holds(game: &Game) -> bool {
        game.step() < game.history_length()
            && game
                .history()
                .iter()
                .all(|board| board.size() == game.board_size())
    }

    fn description() -> &'static str {
        "Step pointer is within history and all snapshots share one size"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, BoardSize};

    #[test]
    fn test_jump_holds() {
        let game = Game::replay(BoardSize::Three, &[0, 1, 2])
            .unwrap()
            .jump_to(0)
            .unwrap();
        assert!(StepInRangeInvariant::holds(&game));
    }

    #[test]
    fn test_dangling_step_violates() {
        let mut game = Game::default();
        game.step = 1;
        assert!(!StepInRangeInvariant::holds(&game));
    }

    #[test]
    fn test_mixed_sizes_violate() {
        let mut game = Game::default();
        game.history.push(Board::new(BoardSize::Four));
        assert!(!StepInRangeInvariant::holds(&game));
    }
}
