//! Key mapping from terminal events to tilt readings.
//!
//! The arrow keys stand in for the accelerometer. Pressing Down tilts the
//! logo up, which the game turns into a downward move (and vice versa), so
//! the keys feel natural even though the sensor axes are inverted.

use crate::types::Tilt;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a tilt reading.
pub fn map_key(code: KeyCode) -> Option<Tilt> {
    match code {
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(Tilt::Up)
        }
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(Tilt::Down)
        }
        _ => None,
    }
}

/// Map a full key event to a tilt reading.
pub fn handle_key_event(key: KeyEvent) -> Option<Tilt> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    map_key(key.code)
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key asks for a new round (the board's "shake to reset").
pub fn is_restart(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char(' ') | KeyCode::Enter
    )
}
