//! Win detection logic for tic-tac-toe.

use crate::cell::Cell;
use crate::outcome::WinningLine;
use crate::types::{Board, Mark, Square};
use tracing::instrument;

/// The eight lines, in evaluation order.
pub const WINNING_LINES: [WinningLine; 8] = [
    // Rows
    WinningLine([Cell::TopLeft, Cell::TopCenter, Cell::TopRight]),
    WinningLine([Cell::MiddleLeft, Cell::Center, Cell::MiddleRight]),
    WinningLine([Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight]),
    // Columns
    WinningLine([Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft]),
    WinningLine([Cell::TopCenter, Cell::Center, Cell::BottomCenter]),
    WinningLine([Cell::TopRight, Cell::MiddleRight, Cell::BottomRight]),
    // Diagonals
    WinningLine([Cell::TopLeft, Cell::Center, Cell::BottomRight]),
    WinningLine([Cell::TopRight, Cell::Center, Cell::BottomLeft]),
];

/// Returns the first line owned entirely by one mark.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Mark, WinningLine)> {
    WINNING_LINES.iter().find_map(|line| {
        let [a, b, c] = line.cells();
        match board.get(a) {
            Square::Occupied(mark) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some((mark, *line))
            }
            _ => None,
        }
    })
}
