//! Core domain types: marks, squares and the board.

use crate::cell::Cell;
use crate::error::{GameError, IllegalMoveReason};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// X always moves first.
    X,
    /// O moves second.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Contents of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// No mark yet.
    #[default]
    Empty,
    /// Holds a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at a cell.
    pub fn get(&self, cell: Cell) -> Square {
        self.squares[cell.index()]
    }

    /// Places a mark on an empty cell.
    ///
    /// # Errors
    ///
    /// `IllegalMove` if the cell is occupied; the board is left unchanged.
    #[instrument(skip(self))]
    pub fn set(&mut self, cell: Cell, mark: Mark) -> Result<(), GameError> {
        let slot = &mut self.squares[cell.index()];
        if *slot != Square::Empty {
            return Err(GameError::IllegalMove(IllegalMoveReason::Occupied(cell)));
        }
        *slot = Square::Occupied(mark);
        Ok(())
    }

    /// Empties one cell. Only undo may take a mark back off the board.
    pub(crate) fn clear_cell(&mut self, cell: Cell) {
        self.squares[cell.index()] = Square::Empty;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell) == Square::Empty
    }

    /// True iff every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Empties every cell.
    pub fn clear(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        Cell::ALL
            .iter()
            .copied()
            .filter(|cell| self.is_empty(*cell))
            .collect()
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// All squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(mark) => write!(f, "{}", mark)?,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board.empty_cells().len(), 9);
        assert!(!board.is_full());
    }

    #[test]
    fn test_set_occupied_cell_fails_without_mutation() {
        let mut board = Board::new();
        board.set(Cell::Center, Mark::X).unwrap();

        let before = board.clone();
        let err = board.set(Cell::Center, Mark::O).unwrap_err();

        assert_eq!(
            err,
            GameError::IllegalMove(IllegalMoveReason::Occupied(Cell::Center))
        );
        assert_eq!(board, before);
        assert_eq!(board.get(Cell::Center), Square::Occupied(Mark::X));
    }

    #[test]
    fn test_full_and_clear() {
        let mut board = Board::new();
        for (i, cell) in Cell::ALL.iter().enumerate() {
            let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
            board.set(*cell, mark).unwrap();
        }
        assert!(board.is_full());
        assert_eq!(board.count(Mark::X), 5);
        assert_eq!(board.count(Mark::O), 4);

        board.clear();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.set(Cell::TopLeft, Mark::X).unwrap();
        board.set(Cell::Center, Mark::O).unwrap();
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
