//! Key mapping from terminal events to logical keys.

use crate::types::InputKey;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a crossterm key to the logical key the repeat policy understands.
pub fn map_key(key: KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(InputKey::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(InputKey::Right)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(InputKey::Down)
        }

        // Rotation
        KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('k')
        | KeyCode::Char('K') => Some(InputKey::RotateCw),
        KeyCode::Char('q')
        | KeyCode::Char('Q')
        | KeyCode::Char('z')
        | KeyCode::Char('Z') => Some(InputKey::RotateCcw),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}
