//! Input module - keyboard mapping for the fixed game controls

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::Command;

/// Map a key press to a game command; unbound keys map to nothing
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Left => Some(Command::MoveLeft),
        KeyCode::Right => Some(Command::MoveRight),
        KeyCode::Down => Some(Command::SoftDrop),
        KeyCode::Up => Some(Command::HardDrop),
        KeyCode::Char('x') => Some(Command::RotateCw),
        KeyCode::Char('z') => Some(Command::RotateCcw),
        KeyCode::Char(' ') => Some(Command::Hold),
        KeyCode::Char('p') => Some(Command::Pause),
        KeyCode::Char('g') => Some(Command::NewGame),
        KeyCode::Char('q') | KeyCode::F(10) => Some(Command::Quit),
        _ => None,
    }
}
