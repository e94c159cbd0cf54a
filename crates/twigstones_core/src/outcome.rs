//! Game outcome classification.

use crate::cell::Cell;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// An ordered triple of cells forming three in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine(pub [Cell; 3]);

impl WinningLine {
    /// The cells of the line.
    pub fn cells(&self) -> [Cell; 3] {
        self.0
    }

    /// Whether `cell` lies on this line.
    pub fn contains(&self, cell: Cell) -> bool {
        self.0.contains(&cell)
    }

    /// Cells sorted by index, for order-independent comparison.
    pub fn sorted(&self) -> [Cell; 3] {
        let mut cells = self.0;
        cells.sort();
        cells
    }
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "[{}, {}, {}]", a, b, c)
    }
}

/// Classification of a board state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// No result yet; moves are accepted.
    #[default]
    InProgress,
    /// A mark completed a line.
    Won {
        /// The winner.
        mark: Mark,
        /// The completed line.
        line: WinningLine,
    },
    /// Board full, no line.
    Draw,
}

impl Outcome {
    /// True for `Won` and `Draw`.
    pub fn is_finished(&self) -> bool {
        match self {
            Outcome::InProgress => false,
            Outcome::Won { .. } | Outcome::Draw => true,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won { mark, .. } => Some(*mark),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            Outcome::Won { line, .. } => Some(*line),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won { mark, line } => write!(f, "{} wins on {}", mark, line),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
