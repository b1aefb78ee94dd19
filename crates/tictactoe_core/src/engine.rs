//! Game engine: one round plus the running score.

use super::invariants::{InvariantSet, RoundInvariants};
use super::rules::{self, Verdict};
use super::{Board, GameStatus, Line, MoveError, Player, Position, Score};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A single playthrough from an empty board to a terminal status.
///
/// Serialize-only: a round is built by [`GameEngine`] and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Round {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) status: GameStatus,
    pub(crate) winning_line: Option<Line>,
}

impl Round {
    /// Creates a fresh round: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            winning_line: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    ///
    /// After a win this is still the winner; no further moves are accepted.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the round status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the line that won the round, if it was won.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable copy of everything a view needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// The board as three rows.
    pub board: [[super::Square; 3]; 3],
    /// Player to move.
    pub current_player: Player,
    /// Round status.
    pub status: GameStatus,
    /// Wins per player.
    pub score: Score,
    /// `(row, col)` cells of the winning line; empty unless the round was won.
    pub winning_line: Vec<(usize, usize)>,
    /// Whether starting a new round is currently offered.
    pub can_start_new_round: bool,
}

/// Tic-tac-toe game engine.
///
/// Owns the current [`Round`] and the [`Score`]. State changes only through
/// [`apply_move`](Self::apply_move) / [`play`](Self::play),
/// [`start_new_round`](Self::start_new_round) and
/// [`reset_score`](Self::reset_score). Each call runs to completion, so a
/// won status and its score increment always appear together.
///
/// The engine serializes for inspection but cannot be deserialized, so there
/// is no way to load a state the three operations could not have produced:
///
/// ```
/// # use tictactoe_core::GameEngine;
/// let json = serde_json::to_value(GameEngine::new()).unwrap();
/// assert_eq!(json["round"]["current_player"], "X");
/// ```
///
/// ```compile_fail
/// # use tictactoe_core::GameEngine;
/// let engine: GameEngine = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GameEngine {
    round: Round,
    score: Score,
}

impl GameEngine {
    /// Creates an engine with a fresh round and a zero score.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `(row, col)` for the current player.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for coordinates outside 0-2, and
    /// otherwise whatever [`play`](Self::play) returns. The engine is left
    /// unchanged on error.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<GameStatus, MoveError> {
        let pos = Position::from_row_col(row, col).ok_or_else(|| {
            debug!(row, col, "Rejected move off the board");
            MoveError::OutOfBounds { row, col }
        })?;
        self.play(pos)
    }

    /// Marks `pos` for the current player and re-evaluates the round.
    ///
    /// A completed line ends the round as `Won` and credits the winner in the
    /// same call; a full board ends it as `Draw`; otherwise the turn passes.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once the round is won or drawn, and
    /// [`MoveError::SquareOccupied`] for a marked cell. The engine is left
    /// unchanged on error.
    #[instrument(skip(self), fields(position = ?pos, player = %self.round.current_player))]
    pub fn play(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.round.status.is_terminal() {
            debug!(status = ?self.round.status, "Rejected move after round ended");
            return Err(MoveError::GameOver);
        }
        if !self.round.board.is_empty(pos) {
            debug!("Rejected move on occupied square");
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.round.current_player;
        self.round.board.place(pos, player);

        match rules::evaluate(&self.round.board) {
            Verdict::Won { winner, line } => {
                self.round.status = GameStatus::Won(winner);
                self.round.winning_line = Some(line);
                self.score.record_win(winner);
                info!(%winner, line = ?line.coords(), score = %self.score, "Round won");
            }
            Verdict::Draw => {
                self.round.status = GameStatus::Draw;
                info!("Round drawn");
            }
            Verdict::InProgress => {
                self.round.current_player = player.opponent();
            }
        }

        debug_assert!(
            RoundInvariants::check_all(&self.round).is_ok(),
            "round invariants violated: {:?}",
            RoundInvariants::check_all(&self.round)
        );

        Ok(self.round.status)
    }

    /// Replaces the round with a fresh one. The score is kept.
    #[instrument(skip(self))]
    pub fn start_new_round(&mut self) {
        debug!(previous = ?self.round.status, "Starting new round");
        self.round = Round::new();
    }

    /// Zeroes the score and starts a new round.
    #[instrument(skip(self))]
    pub fn reset_score(&mut self) {
        info!(previous = %self.score, "Resetting score");
        self.score.reset();
        self.start_new_round();
    }

    /// Whether a new round is on offer, i.e. the current one has ended.
    pub fn can_start_new_round(&self) -> bool {
        self.round.status.is_terminal()
    }

    /// Whether a move at `pos` would be accepted.
    pub fn is_playable(&self, pos: Position) -> bool {
        !self.round.status.is_terminal() && self.round.board.is_empty(pos)
    }

    /// Returns the current round.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.round.board()
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.round.current_player()
    }

    /// Returns the round status.
    pub fn status(&self) -> GameStatus {
        self.round.status()
    }

    /// Returns the score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Returns the winning line, if the round was won.
    pub fn winning_line(&self) -> Option<Line> {
        self.round.winning_line()
    }

    /// Returns the winning line as `(row, col)` pairs; empty unless won.
    pub fn winning_coords(&self) -> Vec<(usize, usize)> {
        self.round
            .winning_line
            .map(|line| line.coords().to_vec())
            .unwrap_or_default()
    }

    /// Copies out the full observable state.
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            board: self.round.board.rows(),
            current_player: self.round.current_player,
            status: self.round.status,
            score: self.score,
            winning_line: self.winning_coords(),
            can_start_new_round: self.can_start_new_round(),
        }
    }
}
