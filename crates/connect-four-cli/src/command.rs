//! Parsing of player input lines.

use std::str::FromStr;
use thiserror::Error;

/// A single line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Drop a piece into a column (0-based)
    Drop(usize),
    /// Discard the current game and start a new one
    Restart,
    /// Show available commands
    Help,
    /// Leave the program
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Enter a column number, or 'help'")]
    Empty,

    #[error("Unrecognized input {0:?}; type 'help' for commands")]
    Unknown(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(CommandError::Empty);
        }

        if let Ok(column) = input.parse::<usize>() {
            return Ok(Command::Drop(column));
        }

        match input.to_ascii_lowercase().as_str() {
            "restart" | "r" | "new" => Ok(Command::Restart),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(input.to_string())),
        }
    }
}

pub const HELP: &str = "\
Commands:
  <column>    drop a piece into that column (0-based)
  restart, r  start a new game
  help, h, ?  show this message
  quit, q     leave";
