//! Assistant commands.
//!
//! Parsing of input lines, dispatch of commands onto the address book, and
//! the single mapping from errors to the messages users see.

pub mod handlers;
pub mod parser;

pub use parser::{parse_input, Command};

use crate::book::AddressBook;
use crate::config::Config;
use crate::error::{BookError, BookResult};
use tracing::debug;

/// What the assistant should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the message and read the next command
    Reply(String),
    /// Print the message and end the session
    Exit(String),
}

impl Outcome {
    /// The text to print.
    pub fn message(&self) -> &str {
        match self {
            Outcome::Reply(message) | Outcome::Exit(message) => message,
        }
    }
}

/// Run `command` against `book`.
///
/// The birthdays report uses `config.reference_date()` at call time and the
/// configured window length.
pub fn dispatch(
    book: &mut AddressBook,
    command: &Command,
    args: &[String],
    config: &Config,
) -> BookResult<Outcome> {
    debug!(%command, args = args.len(), "dispatching command");

    let reply = match command {
        Command::Exit => return Ok(Outcome::Exit("Good bye!".to_string())),
        Command::Hello => "How can I help you?".to_string(),
        Command::Add => handlers::add_contact(args, book)?,
        Command::Change => handlers::change_contact(args, book)?,
        Command::Phone => handlers::show_phone(args, book)?,
        Command::All => handlers::show_all(book)?,
        Command::AddBirthday => handlers::add_birthday(args, book)?,
        Command::ShowBirthday => handlers::show_birthday(args, book)?,
        Command::Birthdays => handlers::birthdays(
            book,
            config.reference_date(),
            config.birthday_window_days,
        )?,
        Command::Unknown(_) => "Invalid command.".to_string(),
    };
    Ok(Outcome::Reply(reply))
}

/// Parse and run one input line.
pub fn execute_line(book: &mut AddressBook, line: &str, config: &Config) -> BookResult<Outcome> {
    let (command, args) = parse_input(line)?;
    dispatch(book, &command, &args, config)
}

/// The message shown for an error returned by a command.
pub fn render_error(err: &BookError) -> String {
    match err {
        BookError::ContactNotFound(name) => format!("Error: Contact '{}' not found.", name),
        BookError::EmptyCommand => format!("Invalid command. {}", err),
        other => format!("Error: {}", other),
    }
}
