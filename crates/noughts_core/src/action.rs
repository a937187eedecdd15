//! Rejected move attempts.

use crate::Position;

/// Reason a move attempt was rejected.
///
/// Every variant is an invalid move: the game state is left untouched and
/// shells are expected to ignore the attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Coordinates outside the 3x3 grid.
    #[display("Cell ({row}, {col}) is outside the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("{_0} is already occupied")]
    CellOccupied(Position),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
