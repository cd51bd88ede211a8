//! Contact record: a name, its phone numbers and an optional birthday.

use crate::domain::{BirthDate, PhoneNumber};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact in the address book.
///
/// The name is the address book key and is stored verbatim. It is fixed at
/// construction so a record held by an address book always matches its key.
/// Phones keep insertion order and may repeat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Contact name, also the key in [`AddressBook`](crate::book::AddressBook)
    name: String,

    /// Phone numbers in the order they were added
    #[serde(default)]
    pub phones: Vec<PhoneNumber>,

    /// Birth date, if one has been recorded
    #[serde(default)]
    pub birthday: Option<BirthDate>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Contact name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validate `phone` and append it.
    pub fn add_phone(&mut self, phone: &str) -> BookResult<()> {
        self.phones.push(PhoneNumber::new(phone)?);
        Ok(())
    }

    /// Remove the first phone equal to `phone`.
    pub fn remove_phone(&mut self, phone: &str) -> BookResult<()> {
        let index = self.position_of(phone)?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replace `old_phone` with `new_phone`, appending the new number at the end.
    ///
    /// The old number is removed before the new one is validated, so an
    /// invalid `new_phone` returns `InvalidPhone` with `old_phone` already gone.
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> BookResult<()> {
        let index = self.position_of(old_phone)?;
        self.phones.remove(index);
        self.add_phone(new_phone)
    }

    /// First phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Validate `birthday` and store it, replacing any previous value.
    pub fn add_birthday(&mut self, birthday: &str) -> BookResult<()> {
        self.birthday = Some(BirthDate::new(birthday)?);
        Ok(())
    }

    /// Phones joined with `"; "`, the form shown by `phone` and `all`.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn position_of(&self, phone: &str) -> BookResult<usize> {
        self.phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| BookError::PhoneNotFound(phone.to_string()))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_display()
        )?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
