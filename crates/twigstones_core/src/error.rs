//! Error types for the game engine.

use crate::cell::Cell;
use crate::types::Mark;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Why a move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum IllegalMoveReason {
    /// The cell already holds a mark.
    #[display("cell {} is already occupied", _0)]
    Occupied(Cell),

    /// The game has a result; reset before playing again.
    #[display("the game is already over")]
    GameFinished,

    /// The caller may not move for this mark right now.
    #[display("it is not {}'s turn to be played from here", _0)]
    NotYourTurn(Mark),

    /// A raw index outside 0-8.
    #[display("cell {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// Input that names no cell.
    #[display("'{}' does not name a cell", _0)]
    Unrecognized(String),
}

/// Errors returned by engine operations.
///
/// Every error is recoverable: the failed call leaves all state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, Serialize, Deserialize)]
pub enum GameError {
    /// The requested move is not legal in the current state.
    #[display("Illegal move: {}", _0)]
    IllegalMove(#[error(not(source))] IllegalMoveReason),

    /// There is no move to undo.
    #[display("No moves to undo")]
    EmptyHistory,

    /// The board is full, so there is nothing to pick.
    #[display("No legal move available")]
    NoLegalMove,
}

impl GameError {
    /// Returns true for any [`GameError::IllegalMove`].
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, GameError::IllegalMove(_))
    }
}
