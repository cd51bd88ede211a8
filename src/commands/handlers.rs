//! Command handlers.
//!
//! Each handler maps positional arguments onto address book operations
//! and returns the reply text. Extra arguments are ignored; too few
//! produce `BookError::MissingArguments`.

use crate::book::AddressBook;
use crate::error::{BookError, BookResult};
use crate::models::Record;
use chrono::NaiveDate;
use tracing::debug;

/// Positional argument `index`, or `MissingArguments`.
fn arg(args: &[String], index: usize) -> BookResult<&str> {
    args.get(index)
        .map(String::as_str)
        .ok_or(BookError::MissingArguments)
}

fn record_mut<'a>(book: &'a mut AddressBook, name: &str) -> BookResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
}

fn record<'a>(book: &'a AddressBook, name: &str) -> BookResult<&'a Record> {
    book.find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
}

/// `add <name> <phone>`: create the contact if needed, then add the phone.
///
/// A new contact is stored before its phone is validated, so an invalid
/// phone still leaves the new contact in the book without phones.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let name = arg(args, 0)?;
    let phone = arg(args, 1)?;

    let message = if book.find(name).is_some() {
        "Contact updated."
    } else {
        book.add_record(Record::new(name));
        debug!(name, "contact added");
        "Contact added."
    };

    record_mut(book, name)?.add_phone(phone)?;
    Ok(message.to_string())
}

/// `change <name> <old phone> <new phone>`
pub fn change_contact(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let name = arg(args, 0)?;
    let old_phone = arg(args, 1)?;
    let new_phone = arg(args, 2)?;

    record_mut(book, name)?.edit_phone(old_phone, new_phone)?;
    Ok("Contact's phone updated.".to_string())
}

/// `phone <name>`
pub fn show_phone(args: &[String], book: &AddressBook) -> BookResult<String> {
    let name = arg(args, 0)?;
    Ok(record(book, name)?.phones_display())
}

/// `all`
pub fn show_all(book: &AddressBook) -> BookResult<String> {
    if book.is_empty() {
        return Ok("No contacts found.".to_string());
    }
    Ok(book
        .records()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let name = arg(args, 0)?;
    let birthday = arg(args, 1)?;

    record_mut(book, name)?.add_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[String], book: &AddressBook) -> BookResult<String> {
    let name = arg(args, 0)?;
    Ok(match &record(book, name)?.birthday {
        Some(birthday) => birthday.to_string(),
        None => "Birthday not set for this contact.".to_string(),
    })
}

/// `birthdays`: the upcoming birthdays report starting at `today`.
pub fn birthdays(book: &AddressBook, today: NaiveDate, window_days: u32) -> BookResult<String> {
    let upcoming = book.upcoming_birthdays_within(today, window_days);
    debug!(%today, window_days, found = upcoming.len(), "upcoming birthdays computed");

    if upcoming.is_empty() {
        return Ok("No upcoming birthdays this week.".to_string());
    }
    Ok(upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}
