//! Contact Book Assistant - an in-memory contact book with a line-oriented assistant.
//!
//! The library stores contacts with validated phone numbers and birth dates,
//! and reports whose birthday should be celebrated in the coming week, moving
//! weekend birthdays to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (phone number, birth date)
//! - **models**: Contact records and upcoming birthday report rows
//! - **book**: The address book and the upcoming birthdays algorithm
//! - **commands**: Input parsing, command handlers and error messages
//! - **assistant**: The interactive read/dispatch/print loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod assistant;
pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use assistant::{run_session, Assistant};
pub use book::AddressBook;
pub use commands::{execute_line, render_error, Command, Outcome};
pub use config::Config;
pub use domain::{BirthDate, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use models::{Record, UpcomingBirthday};
