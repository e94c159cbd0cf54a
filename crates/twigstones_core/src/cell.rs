//! Cell enum naming the nine board positions.

use crate::error::{GameError, IllegalMoveReason};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the 3x3 board, indexed 0-8 in row-major order.
///
/// Every value of this type is a valid board index, so the engine never
/// has to bounds-check. Raw numbers from the outside world go through
/// [`Cell::try_from`] or [`Cell::from_label_or_number`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(try_from = "usize", into = "usize")]
pub enum Cell {
    /// Top-left (cell 0)
    TopLeft,
    /// Top-center (cell 1)
    TopCenter,
    /// Top-right (cell 2)
    TopRight,
    /// Middle-left (cell 3)
    MiddleLeft,
    /// Center (cell 4)
    Center,
    /// Middle-right (cell 5)
    MiddleRight,
    /// Bottom-left (cell 6)
    BottomLeft,
    /// Bottom-center (cell 7)
    BottomCenter,
    /// Bottom-right (cell 8)
    BottomRight,
}

impl Cell {
    /// All 9 cells in row-major order.
    pub const ALL: [Cell; 9] = [
        Cell::TopLeft,
        Cell::TopCenter,
        Cell::TopRight,
        Cell::MiddleLeft,
        Cell::Center,
        Cell::MiddleRight,
        Cell::BottomLeft,
        Cell::BottomCenter,
        Cell::BottomRight,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Cell::TopLeft => "Top-left",
            Cell::TopCenter => "Top-center",
            Cell::TopRight => "Top-right",
            Cell::MiddleLeft => "Middle-left",
            Cell::Center => "Center",
            Cell::MiddleRight => "Middle-right",
            Cell::BottomLeft => "Bottom-left",
            Cell::BottomCenter => "Bottom-center",
            Cell::BottomRight => "Bottom-right",
        }
    }

    /// Board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Row (0-2).
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Column (0-2).
    pub fn col(self) -> usize {
        self.index() % 3
    }

    /// Creates a cell from a board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a cell from a row and column, both 0-2.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Parses a cell from an index (0-8) or a label.
    ///
    /// Labels match case-insensitively, so `"center"` and `"Top-Left"`
    /// both work.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Result<Self, GameError> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return Self::try_from(num);
        }

        Self::ALL
            .iter()
            .copied()
            .find(|cell| cell.label().eq_ignore_ascii_case(s))
            .ok_or(GameError::IllegalMove(IllegalMoveReason::Unrecognized(
                s.to_string(),
            )))
    }
}

impl TryFrom<usize> for Cell {
    type Error = GameError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(GameError::IllegalMove(IllegalMoveReason::OutOfRange(index)))
    }
}

impl From<Cell> for usize {
    fn from(cell: Cell) -> Self {
        cell.index()
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_indices_are_row_major() {
        for (i, cell) in Cell::iter().enumerate() {
            assert_eq!(cell.index(), i);
            assert_eq!(Cell::from_index(i), Some(cell));
        }
        assert_eq!(Cell::from_row_col(1, 2), Some(Cell::MiddleRight));
        assert_eq!(Cell::BottomCenter.row(), 2);
        assert_eq!(Cell::BottomCenter.col(), 1);
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        assert_eq!(
            Cell::try_from(9),
            Err(GameError::IllegalMove(IllegalMoveReason::OutOfRange(9)))
        );
        assert_eq!(Cell::from_row_col(3, 0), None);
    }

    #[test]
    fn test_parse_label_or_number() {
        assert_eq!(Cell::from_label_or_number("4"), Ok(Cell::Center));
        assert_eq!(Cell::from_label_or_number(" center "), Ok(Cell::Center));
        assert_eq!(Cell::from_label_or_number("top-LEFT"), Ok(Cell::TopLeft));
        assert!(Cell::from_label_or_number("middle").is_err());
        assert!(Cell::from_label_or_number("12").is_err());
    }

    #[test]
    fn test_serde_uses_index() {
        let json = serde_json::to_string(&Cell::BottomRight).unwrap();
        assert_eq!(json, "8");
        let cell: Cell = serde_json::from_str("2").unwrap();
        assert_eq!(cell, Cell::TopRight);
        assert!(serde_json::from_str::<Cell>("9").is_err());
    }
}
