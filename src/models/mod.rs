//! Data models for the contact book.
//!
//! Contact records held by the address book, and the rows of the
//! upcoming birthdays report.

pub mod record;
pub mod upcoming;

pub use record::Record;
pub use upcoming::UpcomingBirthday;
