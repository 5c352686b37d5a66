//! Keyboard helpers for board navigation.

use crossterm::event::KeyCode;
use strictly_timetravel::Position;

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Maps keypad digits 1-9 to cells 0-8.
pub fn digit_to_cell(c: char) -> Option<usize> {
    match c.to_digit(10)? {
        0 => None,
        digit => Some(digit as usize - 1),
    }
}
