use std::io::{self, Stdout, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

/// One logical key press, as seen by the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Left,
    Up,
    Right,
    Down,
    Char(char),
    Other,
}

/// Text console the game talks to. `write` leaves the cursor on the same
/// line (prompts); `write_line` appends a line break.
pub trait Console {
    fn write(&mut self, text: &str) -> io::Result<()>;
    fn write_line(&mut self, text: &str) -> io::Result<()>;

    /// Block until the next key press.
    fn read_key(&mut self) -> io::Result<Key>;
}

/// Console over stdout and crossterm key events. Expects the terminal to be
/// in raw mode, so line breaks are written as `\r\n`.
pub struct StdConsole {
    stdout: Stdout,
}

impl StdConsole {
    pub fn new() -> Self {
        StdConsole {
            stdout: io::stdout(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.stdout.write_all(text.as_bytes())?;
        self.stdout.flush()
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.stdout.write_all(text.as_bytes())?;
        self.stdout.write_all(b"\r\n")?;
        self.stdout.flush()
    }

    fn read_key(&mut self) -> io::Result<Key> {
        loop {
            if let Event::Key(key) = event::read()? {
                // Ignore release/repeat events on platforms that report them
                if key.kind == KeyEventKind::Press {
                    return Ok(key_from_code(key.code));
                }
            }
        }
    }
}

fn key_from_code(code: KeyCode) -> Key {
    match code {
        KeyCode::Esc => Key::Escape,
        KeyCode::Left => Key::Left,
        KeyCode::Up => Key::Up,
        KeyCode::Right => Key::Right,
        KeyCode::Down => Key::Down,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(key_from_code(KeyCode::Esc), Key::Escape);
        assert_eq!(key_from_code(KeyCode::Left), Key::Left);
        assert_eq!(key_from_code(KeyCode::Up), Key::Up);
        assert_eq!(key_from_code(KeyCode::Right), Key::Right);
        assert_eq!(key_from_code(KeyCode::Down), Key::Down);
        assert_eq!(key_from_code(KeyCode::Char('1')), Key::Char('1'));
        assert_eq!(key_from_code(KeyCode::Enter), Key::Other);
        assert_eq!(key_from_code(KeyCode::Tab), Key::Other);
    }
}
