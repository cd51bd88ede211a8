//! The address book and its upcoming birthdays query.

pub mod address_book;
pub mod birthdays;

pub use address_book::AddressBook;
pub use birthdays::DEFAULT_WINDOW_DAYS;
