//! Test fixtures and sample data.
//!
//! Reusable records and dates shared by the integration tests.

use chrono::NaiveDate;
use contact_book_assistant::{AddressBook, Config, Record};

/// Build a date, panicking on invalid input.
#[allow(dead_code)]
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// A record with the given phones and optional birthday.
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::new(name);
    for phone in phones {
        record.add_phone(phone).expect("valid fixture phone");
    }
    if let Some(birthday) = birthday {
        record.add_birthday(birthday).expect("valid fixture birthday");
    }
    record
}

/// The four contacts shared by most tests.
pub fn sample_book() -> AddressBook {
    [
        sample_record("John", &["1234567890", "5555555555"], Some("05.11.1985")),
        sample_record("Jane", &["9876543210"], Some("03.11.1990")),
        sample_record("Bill", &["7777777777"], Some("08.11.1992")),
        sample_record("Sue", &["8888888888"], Some("15.11.1991")),
    ]
    .into_iter()
    .collect()
}

/// Configuration pinned to Friday 2024-11-01.
#[allow(dead_code)]
pub fn fixed_config() -> Config {
    Config {
        today: Some(ymd(2024, 11, 1)),
        ..Config::default()
    }
}
