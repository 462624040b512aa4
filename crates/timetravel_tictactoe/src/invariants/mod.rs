//! First-class invariants for the game history.
//!
//! Invariants are logical properties that must hold after every transition.
//! They are testable independently and serve as documentation of system
//! guarantees.

mod empty_origin;
mod single_cell_delta;
mod step_in_range;

pub use empty_origin::EmptyOriginInvariant;
pub use single_cell_delta::SingleCellDeltaInvariant;
pub use step_in_range::StepInRangeInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn violations<const N: usize>(
    results: [(bool, &'static str); N],
) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = results
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        violations([
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ])
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        violations([
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ])
    }
}

/// All game invariants as a composable set.
pub type GameInvariants = (
    StepInRangeInvariant,
    EmptyOriginInvariant,
    SingleCellDeltaInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardSize, Game, Player, Square};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        for size in [BoardSize::Three, BoardSize::Four, BoardSize::Five] {
            assert!(GameInvariants::check_all(&Game::new(size)).is_ok());
        }
    }

    #[test]
    fn test_invariant_set_holds_after_branching() {
        let game = Game::replay(BoardSize::Four, &[0, 5, 10])
            .unwrap()
            .jump_to(1)
            .unwrap()
            .apply_move(15)
            .unwrap();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut game = Game::replay(BoardSize::Three, &[4]).unwrap();
        game.history[1]
            .set(0, Square::Occupied(Player::O))
            .unwrap();
        game.step = 7;

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (EmptyOriginInvariant, StepInRangeInvariant);
        assert!(TwoInvariants::check_all(&Game::default()).is_ok());
    }
}
