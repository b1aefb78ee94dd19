//! Balanced marks invariant: X never trails O and never leads by more than one.

use super::super::{Player, Round};
use super::Invariant;

/// Invariant: `count(X) - count(O)` is 0 or 1.
///
/// X moves first and players alternate, so any reachable board satisfies
/// this.
pub struct BalancedMarksInvariant;

impl Invariant<Round> for BalancedMarksInvariant {
    fn holds(round: &Round) -> bool {
        let x = round.board().count(Player::X);
        let o = round.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or exactly one more"
    }
}
