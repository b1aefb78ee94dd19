//! Pure tic-tac-toe game logic.
//!
//! [`GameEngine`] owns one [`Round`] (board, player to move, status, winning
//! line) and a [`Score`] that survives across rounds. Views drive it with
//! three operations and read [`GameEngine::snapshot`] after each one.
//!
//! ```
//! use tictactoe_core::{GameEngine, GameStatus, Player};
//!
//! let mut engine = GameEngine::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2)] {
//!     engine.apply_move(row, col).unwrap();
//! }
//! assert_eq!(engine.apply_move(0, 2), Ok(GameStatus::Won(Player::X)));
//! assert_eq!(engine.winning_coords(), vec![(0, 0), (0, 1), (0, 2)]);
//! assert_eq!(engine.score().get(Player::X), 1);
//!
//! // Occupied cells and finished rounds are declined without side effects.
//! assert!(engine.apply_move(2, 0).is_err());
//!
//! engine.start_new_round();
//! assert_eq!(engine.status(), GameStatus::InProgress);
//! assert_eq!(engine.score().get(Player::X), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod line;
mod position;
mod score;
mod types;

pub mod invariants;
pub mod rules;

pub use engine::{EngineSnapshot, GameEngine, Round};
pub use error::MoveError;
pub use line::Line;
pub use position::Position;
pub use score::Score;
pub use types::{Board, GameStatus, Player, Square};
