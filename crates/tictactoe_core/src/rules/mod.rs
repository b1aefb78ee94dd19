//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board. The engine
//! calls [`evaluate`] once after each accepted move and nowhere else.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;

use super::{Board, Line, Player};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No line and at least one empty square.
    InProgress,
    /// A line is complete.
    Won {
        /// Owner of the line.
        winner: Player,
        /// The first complete line in check order.
        line: Line,
    },
    /// Full board, no line.
    Draw,
}

/// Evaluates a board: win first, then draw, otherwise still in progress.
#[instrument]
pub fn evaluate(board: &Board) -> Verdict {
    if let Some((winner, line)) = check_winner(board) {
        Verdict::Won { winner, line }
    } else if is_full(board) {
        Verdict::Draw
    } else {
        Verdict::InProgress
    }
}
