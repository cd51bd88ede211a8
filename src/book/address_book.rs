//! In-memory address book keyed by contact name.

use super::birthdays::{self, DEFAULT_WINDOW_DAYS};
use crate::error::{BookError, BookResult};
use crate::models::{Record, UpcomingBirthday};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Contact records keyed by name, iterated in insertion order.
///
/// Replacing a record keeps its original position. Deleting a record and
/// adding it again moves it to the end.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, silently replacing any existing entry.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().to_string();
        if !self.records.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.records.insert(name, record);
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name for modification.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        let record = self
            .records
            .remove(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        self.order.retain(|key| key != name);
        Ok(record)
    }

    /// All records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.order.iter().filter_map(|name| self.records.get(name))
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the book has no records.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Contacts to congratulate in the seven days starting at `today`.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_within(today, DEFAULT_WINDOW_DAYS)
    }

    /// Contacts to congratulate in the `window_days` days starting at `today`.
    pub fn upcoming_birthdays_within(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        birthdays::upcoming_birthdays(self.records(), today, window_days)
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        let mut book = Self::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}
