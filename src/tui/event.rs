//! Event handling for the TUI.
//!
//! The render loop depends only on [`InputSource`] and [`Bell`]; the
//! crossterm-backed implementations live here too.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::PomodoroError;
use crate::features::focus::{Key, PollPolicy};

/// Somewhere keypresses come from.
pub trait InputSource {
    /// Wait for one keypress according to `policy`.
    ///
    /// Returns `None` when no key arrived in time, or when something other
    /// than a keypress (such as a resize) ended the wait.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    fn poll_key(&mut self, policy: PollPolicy) -> Result<Option<Key>, PomodoroError>;
}

/// Something that can make an audible beep.
pub trait Bell {
    /// Beep once.
    ///
    /// # Errors
    ///
    /// Returns an error if the beep cannot be emitted.
    fn ring(&mut self) -> Result<(), PomodoroError>;
}

/// Keyboard input from the controlling terminal.
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn poll_key(&mut self, policy: PollPolicy) -> Result<Option<Key>, PomodoroError> {
        let ready = match policy {
            PollPolicy::Blocking => true,
            PollPolicy::Timeout(timeout) => poll(timeout)?,
            PollPolicy::NonBlocking => poll(Duration::ZERO)?,
        };
        if !ready {
            return Ok(None);
        }

        let event = event::read()
            .map_err(|e| PomodoroError::Terminal(format!("Event read failed: {e}")))?;
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(translate(key))),
            _ => Ok(None),
        }
    }
}

fn poll(timeout: Duration) -> Result<bool, PomodoroError> {
    event::poll(timeout).map_err(|e| PomodoroError::Terminal(format!("Event poll failed: {e}")))
}

/// Map a crossterm key event to a session key.
#[must_use]
pub fn translate(key: KeyEvent) -> Key {
    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Key::Interrupt;
    }

    match key.code {
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    }
}

/// Beeps by writing BEL to the terminal.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl Bell for TerminalBell {
    fn ring(&mut self) -> Result<(), PomodoroError> {
        let mut stdout = io::stdout();
        stdout
            .write_all(b"\x07")
            .and_then(|()| stdout.flush())
            .map_err(|e| PomodoroError::Terminal(format!("Failed to ring bell: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_chars() {
        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(translate(space), Key::Char(' '));

        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(translate(q), Key::Char('q'));
    }

    #[test]
    fn test_translate_ctrl_c() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(translate(ctrl_c), Key::Interrupt);

        let plain_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(translate(plain_c), Key::Char('c'));
    }

    #[test]
    fn test_translate_other_keys() {
        for code in [KeyCode::Enter, KeyCode::Esc, KeyCode::Up, KeyCode::F(5)] {
            assert_eq!(translate(KeyEvent::new(code, KeyModifiers::NONE)), Key::Other);
        }
    }
}
