//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// Both variants carry the rejected input. The display text is the fixed
/// message shown to assistant users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided birth date is not a real `DD.MM.YYYY` date.
    InvalidDate(String),
}

impl ValidationError {
    /// The raw input that failed validation.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidPhone(raw) | Self::InvalidDate(raw) => raw,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(_) => write!(f, "Phone number must be 10 digits."),
            Self::InvalidDate(_) => write!(f, "Invalid date format. Use DD.MM.YYYY"),
        }
    }
}

impl std::error::Error for ValidationError {}
