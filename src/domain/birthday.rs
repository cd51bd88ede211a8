//! BirthDate value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Textual pattern accepted and produced by [`BirthDate`].
pub const BIRTH_DATE_FORMAT: &str = "%d.%m.%Y";

// chrono's `%d` and `%Y` accept short fields, so the shape is pinned first.
static BIRTH_DATE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birth date regex")
});

/// A validated birth date.
///
/// # Example
///
/// ```
/// use contact_book_assistant::domain::BirthDate;
///
/// let birthday = BirthDate::new("03.11.1990").unwrap();
/// assert_eq!(birthday.to_string(), "03.11.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Parse a `DD.MM.YYYY` string into a birth date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the input does not have the
    /// exact shape or names a day that does not exist (e.g. `30.02.2020`).
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();

        if !BIRTH_DATE_SHAPE.is_match(&raw) {
            return Err(ValidationError::InvalidDate(raw));
        }

        match NaiveDate::parse_from_str(&raw, BIRTH_DATE_FORMAT) {
            Ok(date) if date.year() >= 1 => Ok(Self(date)),
            _ => Err(ValidationError::InvalidDate(raw)),
        }
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The anniversary of this birth date in `year`.
    ///
    /// 29 February falls back to 28 February in non-leap years. Returns
    /// `None` only when `year` is outside chrono's representable range.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        self.0
            .with_year(year)
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }
}

impl FromStr for BirthDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for BirthDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BirthDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BirthDate::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTH_DATE_FORMAT))
    }
}
