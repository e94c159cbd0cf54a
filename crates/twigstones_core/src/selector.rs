//! Move selection for the AI opponent.
//!
//! The selector only proposes a cell. The engine applies it through the
//! same validation as any other move.

use crate::cell::Cell;
use crate::error::GameError;
use crate::types::Board;
use rand::rngs::{StdRng, ThreadRng};
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Proposes a cell for the side to move.
pub trait MoveSelector {
    /// Picks a cell on `board`.
    ///
    /// # Errors
    ///
    /// `NoLegalMove` if the board is full.
    fn select_move(&mut self, board: &Board) -> Result<Cell, GameError>;
}

/// Picks uniformly among the empty cells.
///
/// Keeps no record of earlier picks; the only state is the random source.
#[derive(Debug, Clone)]
pub struct RandomMoveSelector<R = ThreadRng> {
    rng: R,
}

impl<R: Rng> RandomMoveSelector<R> {
    /// Wraps a random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomMoveSelector<ThreadRng> {
    /// Uses the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::new(rand::rng())
    }
}

impl RandomMoveSelector<StdRng> {
    /// Reproducible selector for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomMoveSelector<ThreadRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> MoveSelector for RandomMoveSelector<R> {
    #[instrument(skip_all)]
    fn select_move(&mut self, board: &Board) -> Result<Cell, GameError> {
        let empty = board.empty_cells();
        let cell = empty
            .choose(&mut self.rng)
            .copied()
            .ok_or(GameError::NoLegalMove)?;
        debug!(%cell, candidates = empty.len(), "Selected move");
        Ok(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;
    use std::collections::HashMap;

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::new();
        for (i, cell) in Cell::ALL.iter().enumerate() {
            board
                .set(*cell, if i % 2 == 0 { Mark::X } else { Mark::O })
                .unwrap();
        }
        let mut selector = RandomMoveSelector::seeded(1);
        assert_eq!(selector.select_move(&board), Err(GameError::NoLegalMove));
    }

    #[test]
    fn test_single_empty_cell_always_chosen() {
        let mut board = Board::new();
        for (i, cell) in Cell::ALL.iter().enumerate() {
            if *cell != Cell::BottomCenter {
                board
                    .set(*cell, if i % 2 == 0 { Mark::X } else { Mark::O })
                    .unwrap();
            }
        }
        for seed in 0..50 {
            let mut selector = RandomMoveSelector::seeded(seed);
            assert_eq!(selector.select_move(&board), Ok(Cell::BottomCenter));
        }
    }

    #[test]
    fn test_only_empty_cells_and_all_reachable() {
        let mut board = Board::new();
        board.set(Cell::Center, Mark::X).unwrap();
        board.set(Cell::TopLeft, Mark::O).unwrap();

        let mut selector = RandomMoveSelector::seeded(7);
        let mut seen: HashMap<Cell, usize> = HashMap::new();
        for _ in 0..2000 {
            let cell = selector.select_move(&board).unwrap();
            assert!(board.is_empty(cell));
            *seen.entry(cell).or_default() += 1;
        }

        assert_eq!(seen.len(), 7);
        // Uniform over 7 cells: expect ~285 each.
        for count in seen.values() {
            assert!(*count > 150, "skewed distribution: {:?}", seen);
        }
    }
}
