//! Single cell delta invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::{Game, Player, Square};

/// Invariant: Consecutive snapshots differ in exactly one cell.
///
/// The differing cell goes from empty to the mark of the player whose turn
/// it was, so marks alternate X, O, X, ... starting with X.
pub struct SingleCellDeltaInvariant;

impl Invariant<Game> for SingleCellDeltaInvariant {
    fn holds(game: &Game) -> bool {
        game.history()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                let mut changes = pair[0]
                    .squares()
                    .iter()
                    .zip(pair[1].squares())
                    .filter(|(before, after)| before != after);

                let expected = Square::Occupied(Player::for_step(step));
                matches!(
                    (changes.next(), changes.next()),
                    (Some((Square::Empty, after)), None) if *after == expected
                )
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds one mark for the alternating player"
    }
}
