//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Squares are stored in row-major order and indexed by [`Position`], so the
/// board can never be addressed outside its nine cells. Within a round a
/// square only ever goes from empty to occupied; the only mutator is
/// crate-private and is driven by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from three rows of squares.
    ///
    /// Useful for evaluating arbitrary positions with [`crate::rules`].
    pub fn from_rows(rows: [[Square; 3]; 3]) -> Self {
        let mut squares = [Square::Empty; 9];
        for (row, cells) in rows.iter().enumerate() {
            squares[row * 3..row * 3 + 3].copy_from_slice(cells);
        }
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Gets the square at `(row, col)`, or `None` if either is out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<Square> {
        Position::from_row_col(row, col).map(|pos| self.get(pos))
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Counts the squares held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Returns the board as three rows.
    pub fn rows(&self) -> [[Square; 3]; 3] {
        let mut rows = [[Square::Empty; 3]; 3];
        for (idx, square) in self.squares.iter().enumerate() {
            rows[idx / 3][idx % 3] = *square;
        }
        rows
    }

    /// Marks an empty square for `player`.
    pub(crate) fn place(&mut self, pos: Position, player: Player) {
        debug_assert!(self.is_empty(pos), "square {pos} already occupied");
        self.squares[pos.to_index()] = Square::Occupied(player);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    /// Renders the board with cell numbers 1-9 on empty squares.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(player) => write!(f, "{player}")?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Current status of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Round is ongoing.
    InProgress,
    /// Round ended in a win.
    Won(Player),
    /// Round ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Square = Square::Occupied(Player::X);
    const O: Square = Square::Occupied(Player::O);
    const E: Square = Square::Empty;

    #[test]
    fn test_from_rows_is_row_major() {
        let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, X]]);
        assert_eq!(board.get(Position::TopLeft), X);
        assert_eq!(board.get(Position::Center), O);
        assert_eq!(board.get(Position::BottomRight), X);
        assert_eq!(board.cell(1, 1), Some(O));
        assert_eq!(board.rows()[2], [E, E, X]);
    }

    #[test]
    fn test_cell_out_of_range() {
        let board = Board::new();
        assert_eq!(board.cell(3, 0), None);
        assert_eq!(board.cell(0, 3), None);
    }

    #[test]
    fn test_count_and_full() {
        let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
        assert!(board.is_full());
        assert_eq!(board.count(Player::X), 5);
        assert_eq!(board.count(Player::O), 4);
        assert!(!Board::new().is_full());
    }

    #[test]
    fn test_display() {
        let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, E]]);
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_status_helpers() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::Draw.is_terminal());
        assert!(GameStatus::Won(Player::O).is_terminal());
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.to_string(), "O");
    }
}
