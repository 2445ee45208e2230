//! The recognized command alphabet and command-string filtering.

use serde::{Deserialize, Serialize};

/// A single rover command.
///
/// The alphabet is closed: `L`, `R`, and `A` are the only recognized
/// characters. Anything else is not a command and is dropped before
/// simulation (see [`filter_commands`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Rotate one quarter turn counter-clockwise (`L`).
    RotateLeft,
    /// Rotate one quarter turn clockwise (`R`).
    RotateRight,
    /// Advance one cell in the facing direction (`A`).
    Advance,
}

impl Command {
    /// Maps a character to its command, or `None` for anything outside the
    /// alphabet. Unknown characters are not an error; they are simply not
    /// commands.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'L' => Some(Command::RotateLeft),
            'R' => Some(Command::RotateRight),
            'A' => Some(Command::Advance),
            _ => None,
        }
    }

    /// The character this command is written as.
    pub fn letter(self) -> char {
        match self {
            Command::RotateLeft => 'L',
            Command::RotateRight => 'R',
            Command::Advance => 'A',
        }
    }
}

/// Extracts the recognized commands from raw text, in order, silently
/// dropping every other character.
pub fn filter_commands(raw: &str) -> Vec<Command> {
    raw.chars().filter_map(Command::from_char).collect()
}
