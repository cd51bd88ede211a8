//! Integration tests for the upcoming birthdays report.

mod fixtures;

use chrono::{Datelike, Days, Weekday};
use contact_book_assistant::{AddressBook, UpcomingBirthday};
use fixtures::*;

#[test]
fn test_week_from_friday() {
    let book = sample_book();
    let rows = book.upcoming_birthdays(ymd(2024, 11, 1));

    // Bill's Friday 8th is the first day outside the window, Sue is a week later.
    assert_eq!(
        rows,
        vec![
            UpcomingBirthday::new("John", ymd(2024, 11, 5)),
            UpcomingBirthday::new("Jane", ymd(2024, 11, 4)),
        ]
    );
}

#[test]
fn test_report_serializes_to_name_and_date() {
    let book = sample_book();
    let json = serde_json::to_value(book.upcoming_birthdays(ymd(2024, 11, 1))).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"name": "John", "congratulation_date": "2024.11.05"},
            {"name": "Jane", "congratulation_date": "2024.11.04"}
        ])
    );
}

#[test]
fn test_report_follows_insertion_order_not_date_order() {
    let book: AddressBook = [
        sample_record("Late", &[], Some("06.11.2000")),
        sample_record("Early", &[], Some("04.11.2000")),
    ]
    .into_iter()
    .collect();

    let names: Vec<String> = book
        .upcoming_birthdays(ymd(2024, 11, 1))
        .into_iter()
        .map(|row| row.name)
        .collect();
    assert_eq!(names, ["Late", "Early"]);
}

#[test]
fn test_records_without_birthday_are_skipped() {
    let book: AddressBook = [sample_record("NoDate", &["1234567890"], None)]
        .into_iter()
        .collect();
    assert!(book.upcoming_birthdays(ymd(2024, 11, 1)).is_empty());
}

#[test]
fn test_passed_birthday_rolls_over_to_next_year() {
    let book: AddressBook = [
        sample_record("NewYear", &[], Some("02.01.1995")),
        sample_record("Passed", &[], Some("20.12.1995")),
    ]
    .into_iter()
    .collect();

    // Friday 2024-12-27: 2025-01-02 is a Thursday, inside the window.
    let rows = book.upcoming_birthdays(ymd(2024, 12, 27));
    assert_eq!(rows, vec![UpcomingBirthday::new("NewYear", ymd(2025, 1, 2))]);
}

#[test]
fn test_congratulations_never_fall_on_weekends_or_leave_window() {
    // One contact per day of a three-week span, checked from every
    // reference day of the middle week.
    let start = ymd(2025, 3, 1);
    let book: AddressBook = (0..21u64)
        .map(|offset| {
            let date = start.checked_add_days(Days::new(offset)).unwrap();
            let raw = format!("{:02}.{:02}.1980", date.day(), date.month());
            sample_record(&format!("c{}", offset), &[], Some(raw.as_str()))
        })
        .collect();

    for offset in 7..14u64 {
        let today = start.checked_add_days(Days::new(offset)).unwrap();
        let window_end = today.checked_add_days(Days::new(7)).unwrap();

        for row in book.upcoming_birthdays(today) {
            let date = row.congratulation_date;
            assert!(date >= today && date < window_end, "{} outside window", date);
            assert!(
                !matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
                "{} falls on a weekend",
                date
            );
        }
    }
}

#[test]
fn test_window_from_monday_drops_trailing_weekend() {
    let book: AddressBook = [
        sample_record("Fri", &[], Some("08.11.1990")),
        sample_record("Sat", &[], Some("09.11.1990")),
        sample_record("Sun", &[], Some("10.11.1990")),
    ]
    .into_iter()
    .collect();

    let rows = book.upcoming_birthdays(ymd(2024, 11, 4));
    assert_eq!(rows, vec![UpcomingBirthday::new("Fri", ymd(2024, 11, 8))]);
}
