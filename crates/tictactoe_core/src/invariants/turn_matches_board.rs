//! Turn order invariant: the player to move follows from the board.

use super::super::{Player, Round};
use super::Invariant;

/// Invariant: while a round is in progress, X is to move exactly when both
/// players have the same number of marks.
///
/// Terminal rounds are exempt; the winner stays current after the last move.
pub struct TurnMatchesBoardInvariant;

impl Invariant<Round> for TurnMatchesBoardInvariant {
    fn holds(round: &Round) -> bool {
        if round.status().is_terminal() {
            return true;
        }

        let expected = if round.board().count(Player::X) == round.board().count(Player::O) {
            Player::X
        } else {
            Player::O
        };
        round.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameEngine, GameStatus, Position};

    #[test]
    fn test_fresh_round_holds() {
        assert!(TurnMatchesBoardInvariant::holds(&Round::new()));
    }

    #[test]
    fn test_single_move_holds() {
        let mut engine = GameEngine::new();
        engine.play(Position::Center).unwrap();
        assert!(TurnMatchesBoardInvariant::holds(engine.round()));
        assert_eq!(engine.current_player(), Player::O);
    }

    #[test]
    fn test_stale_turn_violates() {
        let mut round = Round::new();
        round.board.place(Position::Center, Player::X);
        // Still X to move after X played
        assert!(!TurnMatchesBoardInvariant::holds(&round));
    }

    #[test]
    fn test_terminal_round_exempt() {
        let mut round = Round::new();
        round.board.place(Position::Center, Player::X);
        round.status = GameStatus::Draw;
        assert!(TurnMatchesBoardInvariant::holds(&round));
    }
}
