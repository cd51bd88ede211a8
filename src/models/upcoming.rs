//! Rows of the upcoming birthdays report.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;

/// Format of a congratulation date in reports.
pub const CONGRATULATION_DATE_FORMAT: &str = "%Y.%m.%d";

/// A contact to congratulate and the (weekday) date to do it on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Date to congratulate on, already moved off the weekend
    #[serde(serialize_with = "serialize_congratulation_date")]
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// Create a report row.
    pub fn new(name: impl Into<String>, congratulation_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            congratulation_date,
        }
    }

    /// The congratulation date as `YYYY.MM.DD`.
    pub fn formatted_date(&self) -> String {
        self.congratulation_date
            .format(CONGRATULATION_DATE_FORMAT)
            .to_string()
    }
}

fn serialize_congratulation_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(CONGRATULATION_DATE_FORMAT))
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, Date: {}", self.name, self.formatted_date())
    }
}
