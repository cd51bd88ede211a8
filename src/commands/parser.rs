//! Input line parsing.

use crate::error::{BookError, BookResult};
use std::fmt;

/// A command understood by the assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    /// `close` or `exit`
    Exit,
    /// Anything else, kept for logging
    Unknown(String),
}

impl From<&str> for Command {
    fn from(token: &str) -> Self {
        match token.to_lowercase().as_str() {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "all" => Command::All,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "close" | "exit" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Command::Hello => "hello",
            Command::Add => "add",
            Command::Change => "change",
            Command::Phone => "phone",
            Command::All => "all",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::Exit => "exit",
            Command::Unknown(other) => other.as_str(),
        };
        f.write_str(name)
    }
}

/// Split a line into a command and its arguments.
///
/// Tokens are separated by any whitespace. The command is matched
/// case-insensitively; arguments are kept verbatim.
///
/// # Errors
///
/// Returns `BookError::EmptyCommand` if the line holds no tokens.
pub fn parse_input(line: &str) -> BookResult<(Command, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let command = Command::from(tokens.next().ok_or(BookError::EmptyCommand)?);
    Ok((command, tokens.map(str::to_string).collect()))
}
