//! Winning line invariant: a won round carries the line that won it.

use super::super::{GameStatus, Round, Square};
use super::Invariant;

/// Invariant: status is `Won(p)` iff a winning line is recorded, and every
/// cell of that line holds `p`.
pub struct WinningLineConsistentInvariant;

impl Invariant<Round> for WinningLineConsistentInvariant {
    fn holds(round: &Round) -> bool {
        match (round.status(), round.winning_line()) {
            (GameStatus::Won(winner), Some(line)) => line
                .positions()
                .iter()
                .all(|pos| round.board().get(*pos) == Square::Occupied(winner)),
            (GameStatus::Won(_), None) => false,
            (GameStatus::InProgress | GameStatus::Draw, line) => line.is_none(),
        }
    }

    fn description() -> &'static str {
        "A won round records a winning line owned by the winner"
    }
}
