//! The eight winning lines.

use super::position::Position;
use serde::Serialize;

/// Three cells in a row, column, or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Line([Position; 3]);

impl Line {
    /// All lines in check order: rows 0-2, columns 0-2, main diagonal, anti diagonal.
    pub const ALL: [Line; 8] = [
        // Rows
        Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
        Line([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
        Line([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
        // Columns
        Line([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
        Line([Position::TopCenter, Position::Center, Position::BottomCenter]),
        Line([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
        // Diagonals
        Line([Position::TopLeft, Position::Center, Position::BottomRight]),
        Line([Position::TopRight, Position::Center, Position::BottomLeft]),
    ];

    /// The three positions, in order.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three `(row, col)` coordinates, in order.
    pub fn coords(&self) -> [(usize, usize); 3] {
        self.0.map(Position::coords)
    }

    /// Whether `pos` is one of the three cells.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}
