//! Ordered log of applied moves.

use crate::action::Move;
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Append-only move log, shrunk only by undo or reset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    moves: Vec<Move>,
}

impl MoveHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a move.
    pub fn append(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Removes and returns the most recent move.
    ///
    /// # Errors
    ///
    /// `EmptyHistory` if nothing has been recorded.
    #[instrument(skip(self), fields(len = self.moves.len()))]
    pub fn pop_last(&mut self) -> Result<Move, GameError> {
        self.moves.pop().ok_or(GameError::EmptyHistory)
    }

    /// The moves in the order they were played.
    pub fn list(&self) -> &[Move] {
        &self.moves
    }

    /// The most recent move.
    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    /// Forgets every move.
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Number of recorded moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// True when no move is recorded.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}
