//! Win detection logic for tic-tac-toe.

use super::super::{Board, Line, Player, Square};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Lines are scanned in [`Line::ALL`] order and the first complete one is
/// returned with its owner, so the result is deterministic even on boards
/// where several lines are complete at once.
#[instrument]
pub fn check_winner(board: &Board) -> Option<(Player, Line)> {
    Line::ALL.into_iter().find_map(|line| {
        let [a, b, c] = line.positions();
        match board.get(a) {
            square @ Square::Occupied(player)
                if board.get(b) == square && board.get(c) == square =>
            {
                Some((player, line))
            }
            _ => None,
        }
    })
}
