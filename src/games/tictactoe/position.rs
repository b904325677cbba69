//! Board positions and their column/row coordinates.

use serde::{Deserialize, Serialize};

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

/// Column/row pair of a cell, both zero-based.
///
/// Displays as `col,row`, the order used in move descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{col},{row}")]
pub struct Coordinates {
    /// Column, 0 is leftmost.
    pub col: usize,
    /// Row, 0 is topmost.
    pub row: usize,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Column and row of this position.
    pub fn coordinates(self) -> Coordinates {
        let index = self.to_index();
        let row = index / 3;
        Coordinates {
            col: index - 3 * row,
            row,
        }
    }

    /// Creates position from a column and row, `None` when off the board.
    pub fn from_coordinates(col: usize, row: usize) -> Option<Self> {
        if col > 2 || row > 2 {
            return None;
        }
        Self::from_index(row * 3 + col)
    }

    /// Moves by the given column/row delta, staying put at the edges.
    pub fn offset(self, dcol: isize, drow: isize) -> Self {
        let Coordinates { col, row } = self.coordinates();
        let col = col.saturating_add_signed(dcol);
        let row = row.saturating_add_signed(drow);
        Self::from_coordinates(col, row).unwrap_or(self)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
