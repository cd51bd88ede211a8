//! Upcoming birthday scheduling.
//!
//! Pure date functions: given a reference date, work out which birthdays
//! fall in the coming window and on which weekday each should be
//! celebrated. Weekend birthdays move to the following Monday.

use crate::domain::BirthDate;
use crate::models::{Record, UpcomingBirthday};
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Length of the upcoming birthdays window, in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Days to add so that a date lands on a weekday.
///
/// Saturday moves two days and Sunday one, both to the next Monday.
pub fn weekend_shift(date: NaiveDate) -> u64 {
    match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    }
}

/// The next anniversary of `birthday` on or after `reference`.
pub fn next_anniversary(birthday: &BirthDate, reference: NaiveDate) -> Option<NaiveDate> {
    let this_year = birthday.anniversary_in(reference.year())?;
    if this_year < reference {
        birthday.anniversary_in(reference.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Congratulation date for `birthday` if it falls in
/// `[reference, reference + window_days)`.
///
/// Both the anniversary and the weekday it is moved to must be inside the
/// window; a Saturday on the last or second-to-last day is dropped.
pub fn congratulation_date(
    birthday: &BirthDate,
    reference: NaiveDate,
    window_days: u32,
) -> Option<NaiveDate> {
    let window_end = reference.checked_add_days(Days::new(window_days.into()))?;
    let anniversary = next_anniversary(birthday, reference)?;

    if !(reference..window_end).contains(&anniversary) {
        return None;
    }

    let congratulate_on = anniversary.checked_add_days(Days::new(weekend_shift(anniversary)))?;
    (congratulate_on < window_end).then_some(congratulate_on)
}

/// Report rows for every record with a birthday inside the window.
///
/// Rows follow the iteration order of `records`; no sorting is applied.
pub fn upcoming_birthdays<'a, I>(
    records: I,
    reference: NaiveDate,
    window_days: u32,
) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter_map(|record| {
            let birthday = record.birthday.as_ref()?;
            let date = congratulation_date(birthday, reference, window_days)?;
            Some(UpcomingBirthday::new(record.name(), date))
        })
        .collect()
}
