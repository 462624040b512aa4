//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Moves a board cursor on a `side`×`side` grid based on arrow keys.
///
/// The cursor stops at the edges.
pub fn move_cursor(cursor: usize, side: usize, key: KeyCode) -> usize {
    let (row, col) = (cursor / side, cursor % side);

    let (row, col) = match key {
        KeyCode::Right if col + 1 < side => (row, col + 1),
        KeyCode::Left if col > 0 => (row, col - 1),
        KeyCode::Down if row + 1 < side => (row + 1, col),
        KeyCode::Up if row > 0 => (row - 1, col),
        _ => (row, col),
    };

    row * side + col
}

/// Moves a list selection up or down within `len` entries.
pub fn move_selection(selected: usize, len: usize, key: KeyCode) -> usize {
    match key {
        KeyCode::Up | KeyCode::Left => selected.saturating_sub(1),
        KeyCode::Down | KeyCode::Right => (selected + 1).min(len.saturating_sub(1)),
        KeyCode::Home => 0,
        KeyCode::End => len.saturating_sub(1),
        _ => selected,
    }
}
