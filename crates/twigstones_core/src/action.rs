//! First-class move types.
//!
//! Moves are domain events: they are recorded in history, replayed by
//! tests and listed by the UI.

use crate::cell::Cell;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// A mark placed on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Where the mark went.
    pub cell: Cell,
    /// The mark placed.
    pub mark: Mark,
}

impl Move {
    /// Creates a new move.
    pub fn new(cell: Cell, mark: Mark) -> Self {
        Self { cell, mark }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → {}", self.mark, self.cell)
    }
}

/// Who is asking the engine to play a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MoveOrigin {
    /// Direct input from a person.
    #[default]
    Human,
    /// The move selector acting for the AI mark.
    Ai,
}
