//! Game rules for tic-tac-toe.
//!
//! Pure functions that classify a board. Rules are kept apart from board
//! storage so the engine, the invariants and the tests can all share them.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{WINNING_LINES, check_winner};

use crate::outcome::Outcome;
use crate::types::Board;
use tracing::instrument;

/// Classifies a board.
///
/// Lines are checked in [`WINNING_LINES`] order and the first completed
/// line decides the result, even when several are complete at once. A
/// full board with no line is a draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, line)) = check_winner(board) {
        return Outcome::Won { mark, line };
    }
    if board.is_full() {
        return Outcome::Draw;
    }
    Outcome::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::outcome::WinningLine;
    use crate::types::Mark;

    fn board_from(cells: &[(usize, Mark)]) -> Board {
        let mut board = Board::new();
        for (i, mark) in cells {
            board.set(Cell::from_index(*i).unwrap(), *mark).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Top row and left column both complete for X.
        let board = board_from(&[
            (0, Mark::X),
            (1, Mark::X),
            (2, Mark::X),
            (3, Mark::X),
            (6, Mark::X),
        ]);
        assert_eq!(
            evaluate(&board),
            Outcome::Won {
                mark: Mark::X,
                line: WinningLine([Cell::TopLeft, Cell::TopCenter, Cell::TopRight]),
            }
        );
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        // X O X / O X O / O X X: X takes the main diagonal on the last cell.
        let board = board_from(&[
            (0, Mark::X),
            (1, Mark::O),
            (2, Mark::X),
            (3, Mark::O),
            (4, Mark::X),
            (5, Mark::O),
            (6, Mark::O),
            (7, Mark::X),
            (8, Mark::X),
        ]);
        assert_eq!(evaluate(&board).winner(), Some(Mark::X));
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let board = board_from(&[(2, Mark::O), (4, Mark::O), (6, Mark::O), (0, Mark::X)]);
        let first = evaluate(&board);
        for _ in 0..10 {
            assert_eq!(evaluate(&board), first);
        }
    }
}
