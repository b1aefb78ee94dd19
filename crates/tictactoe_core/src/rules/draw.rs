//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board is only a draw once [`check_winner`](super::check_winner)
/// has found no line; [`evaluate`](super::evaluate) checks in that order.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}
