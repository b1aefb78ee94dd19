//! Move rejection reasons.

use super::Position;

/// Why a move was declined.
///
/// A rejected move leaves the engine exactly as it was; callers are free to
/// ignore the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Coordinates outside the 3x3 grid.
    #[display("Coordinates ({row}, {col}) are off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The square at the position is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(#[error(not(source))] Position),

    /// The round has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
}
