//! Invariants over the game state.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. [`GameState`](crate::GameState) checks them in debug builds; they
//! can also be tested independently.

use crate::{GameState, GameStatus, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
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
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ]
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
}

/// Invariant: X has placed as many marks as O, or exactly one more.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(game: &GameState) -> bool {
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X marks equal O marks or exceed them by one"
    }
}

/// Invariant: while the game is running, the player to move is the one
/// with fewer marks (X on ties).
pub struct TurnOrderInvariant;

impl Invariant<GameState> for TurnOrderInvariant {
    fn holds(game: &GameState) -> bool {
        if game.status() != GameStatus::InProgress {
            return true;
        }
        let expected = if game.board().count(Player::X) == game.board().count(Player::O) {
            Player::X
        } else {
            Player::O
        };
        game.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

/// All game-state invariants as a composable set.
pub type GameInvariants = (MarkBalanceInvariant, TurnOrderInvariant);
