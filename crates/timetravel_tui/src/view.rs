//! Status and label text for the presentation layer.

use strum::IntoEnumIterator;
use timetravel_tictactoe::{BoardSize, Game};

/// Status line: the winner if there is one, otherwise the next player.
///
/// A full board with no winner still reports the next player.
pub fn status_text(game: &Game) -> String {
    match game.winner() {
        Some(winner) => format!("Winner: {}", winner),
        None => format!("Next player: {}", game.active_player()),
    }
}

/// Label of the history entry for `step`.
pub fn history_label(step: usize) -> String {
    if step == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", step)
    }
}

/// Labels for every stored history entry, in order.
pub fn history_labels(game: &Game) -> Vec<String> {
    (0..game.history_length()).map(history_label).collect()
}

/// Labels for the board-size selectors, in order.
pub fn size_labels() -> Vec<String> {
    BoardSize::iter().map(|size| size.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_next_player() {
        let game = Game::default();
        assert_eq!(status_text(&game), "Next player: X");
        let game = game.apply_move(0).unwrap();
        assert_eq!(status_text(&game), "Next player: O");
    }

    #[test]
    fn test_status_winner() {
        let game = Game::replay(BoardSize::Three, &[0, 4, 1, 5, 2]).unwrap();
        assert_eq!(status_text(&game), "Winner: X");
    }

    #[test]
    fn test_status_on_draw_keeps_next_player() {
        let game = Game::replay(BoardSize::Three, &[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();
        assert_eq!(status_text(&game), "Next player: O");
    }

    #[test]
    fn test_history_labels() {
        let game = Game::replay(BoardSize::Four, &[0, 1]).unwrap();
        assert_eq!(
            history_labels(&game),
            vec!["Go to game start", "Go to move #1", "Go to move #2"]
        );
    }

    #[test]
    fn test_size_labels() {
        assert_eq!(size_labels(), vec!["3x3", "4x4", "5x5"]);
    }
}
