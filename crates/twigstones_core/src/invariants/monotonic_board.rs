//! Monotonic board invariant: the board is exactly what history built.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::Board;

/// Invariant: replaying history onto an empty board reproduces the board.
///
/// Each history entry must land on an empty cell, so no mark was ever
/// overwritten.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let mut reconstructed = Board::new();
        for mv in engine.history().list() {
            if reconstructed.set(mv.cell, mv.mark).is_err() {
                return false;
            }
        }
        reconstructed == *engine.board()
    }

    fn description() -> &'static str {
        "Board matches history with no overwritten cells"
    }
}
