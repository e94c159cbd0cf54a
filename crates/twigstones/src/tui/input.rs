//! Keyboard input: key bindings and cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use twigstones_core::Cell;

/// Cursor direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Up one row.
    Up,
    /// Down one row.
    Down,
    /// Left one column.
    Left,
    /// Right one column.
    Right,
}

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play at a cell.
    Place(Cell),
    /// Play at the cursor.
    PlaceAtCursor,
    /// Move the cursor.
    MoveCursor(Direction),
    /// Take back the last move.
    Undo,
    /// Start a new game.
    NewGame,
    /// Zero the scores and start a new game.
    ResetScores,
    /// Switch between player-vs-player and player-vs-AI.
    ToggleMode,
    /// Step to the next difficulty.
    CycleDifficulty,
    /// Show or hide the move list.
    ToggleHistory,
    /// Leave.
    Quit,
}

/// Key help shown under the board.
pub const KEY_HELP: &str =
    "1-9/arrows+enter: move  u: undo  n: new  r: reset scores  m: mode  d: difficulty  h: history  q: quit";

/// Maps a key press to an action.
///
/// Digits 1-9 address cells in reading order, like a phone keypad.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let action = match key.code {
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            Action::Place(Cell::from_index(index)?)
        }
        KeyCode::Up => Action::MoveCursor(Direction::Up),
        KeyCode::Down => Action::MoveCursor(Direction::Down),
        KeyCode::Left => Action::MoveCursor(Direction::Left),
        KeyCode::Right => Action::MoveCursor(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Action::PlaceAtCursor,
        KeyCode::Char('u') => Action::Undo,
        KeyCode::Char('n') => Action::NewGame,
        KeyCode::Char('r') => Action::ResetScores,
        KeyCode::Char('m') => Action::ToggleMode,
        KeyCode::Char('d') => Action::CycleDifficulty,
        KeyCode::Char('h') => Action::ToggleHistory,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Moves the cursor one step, stopping at the edges.
pub fn move_cursor(cursor: Cell, direction: Direction) -> Cell {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Cell::from_row_col(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_map_to_cells() {
        assert_eq!(
            action_for(press(KeyCode::Char('1'))),
            Some(Action::Place(Cell::TopLeft))
        );
        assert_eq!(
            action_for(press(KeyCode::Char('9'))),
            Some(Action::Place(Cell::BottomRight))
        );
        assert_eq!(action_for(press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_command_keys() {
        assert_eq!(action_for(press(KeyCode::Char('u'))), Some(Action::Undo));
        assert_eq!(action_for(press(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(action_for(press(KeyCode::Enter)), Some(Action::PlaceAtCursor));
        assert_eq!(action_for(press(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_release_ignored() {
        let mut key = press(KeyCode::Char('u'));
        key.kind = KeyEventKind::Release;
        assert_eq!(action_for(key), None);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Cell::TopLeft, Direction::Up), Cell::TopLeft);
        assert_eq!(move_cursor(Cell::TopLeft, Direction::Left), Cell::TopLeft);
        assert_eq!(move_cursor(Cell::TopLeft, Direction::Right), Cell::TopCenter);
        assert_eq!(move_cursor(Cell::Center, Direction::Down), Cell::BottomCenter);
        assert_eq!(move_cursor(Cell::BottomRight, Direction::Down), Cell::BottomRight);
        assert_eq!(move_cursor(Cell::MiddleRight, Direction::Left), Cell::Center);
    }
}
