//! Error types for the contact book assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors produced by contact book operations and assistant commands.
#[derive(Error, Debug)]
pub enum BookError {
    /// A phone number or birth date failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone to edit or remove is not on the record
    #[error("Phone {0} not found.")]
    PhoneNotFound(String),

    /// No record exists under this name
    #[error("Contact {0} not found.")]
    ContactNotFound(String),

    /// A command received fewer arguments than it needs
    #[error("Not enough arguments provided. Please try again.")]
    MissingArguments,

    /// The input line held no command token
    #[error("Please enter a command and arguments.")]
    EmptyCommand,

    /// An input line could not be decoded as UTF-8
    #[error("Input is not valid UTF-8.")]
    InvalidEncoding,

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
