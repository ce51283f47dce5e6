//! Keyboard input.
//!
//! Each tick drains every pending terminal event without blocking and maps
//! key presses to [`GameInput`]s. Nothing is carried over to the next tick.

use crate::game::GameInput;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

/// Source of per-tick input.
pub trait InputSource {
    /// Everything that arrived since the last call, oldest first.
    fn drain(&mut self) -> io::Result<Vec<GameInput>>;
}

/// Reads crossterm events from the terminal.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn drain(&mut self) -> io::Result<Vec<GameInput>> {
        let mut inputs = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                // Release and repeat events are reported on some platforms.
                if key.kind == KeyEventKind::Press {
                    inputs.push(map_key(key));
                }
            }
        }
        Ok(inputs)
    }
}

/// Map a key press to a game input.
pub fn map_key(key: KeyEvent) -> GameInput {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => GameInput::Quit,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => GameInput::Quit,
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            GameInput::Jump
        }
        KeyCode::Char('r') | KeyCode::Char('R') => GameInput::Restart,
        _ => GameInput::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_jump_keys() {
        assert_eq!(map_key(press(KeyCode::Char(' '))), GameInput::Jump);
        assert_eq!(map_key(press(KeyCode::Up)), GameInput::Jump);
        assert_eq!(map_key(press(KeyCode::Char('w'))), GameInput::Jump);
    }

    #[test]
    fn test_restart_keys() {
        assert_eq!(map_key(press(KeyCode::Char('r'))), GameInput::Restart);
        assert_eq!(map_key(press(KeyCode::Char('R'))), GameInput::Restart);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(press(KeyCode::Esc)), GameInput::Quit);
        assert_eq!(map_key(press(KeyCode::Char('q'))), GameInput::Quit);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            GameInput::Quit
        );
    }

    #[test]
    fn test_plain_c_is_other() {
        assert_eq!(map_key(press(KeyCode::Char('c'))), GameInput::Other);
        assert_eq!(map_key(press(KeyCode::Enter)), GameInput::Other);
    }
}
