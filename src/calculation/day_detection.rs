//! Day detection logic.
//!
//! This module provides utilities for classifying a calendar date as a
//! weekday, Saturday or Sunday, and for deciding whether it is a workday.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Represents the type of a calendar day.
///
/// # Example
///
/// ```
/// use staff_records::calculation::DayType;
///
/// let day_type = DayType::Saturday;
/// assert_eq!(format!("{:?}", day_type), "Saturday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl DayType {
    /// Returns true for Saturday and Sunday.
    pub fn is_weekend(self) -> bool {
        matches!(self, DayType::Saturday | DayType::Sunday)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Determines the day type for a given date.
///
/// # Returns
///
/// - [`DayType::Weekday`] for Monday through Friday
/// - [`DayType::Saturday`] for Saturday
/// - [`DayType::Sunday`] for Sunday
///
/// # Example
///
/// ```
/// use staff_records::calculation::{get_day_type, DayType};
/// use chrono::NaiveDate;
///
/// // 2023-07-29 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2023, 7, 29).unwrap();
/// assert_eq!(get_day_type(saturday), DayType::Saturday);
/// ```
pub fn get_day_type(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Weekday,
    }
}

/// Returns true if the date falls on Monday through Friday.
///
/// # Example
///
/// ```
/// use staff_records::calculation::is_workday;
/// use chrono::NaiveDate;
///
/// // 2023-07-30 is a Sunday
/// assert!(!is_workday(NaiveDate::from_ymd_opt(2023, 7, 30).unwrap()));
/// // 2023-07-31 is a Monday
/// assert!(is_workday(NaiveDate::from_ymd_opt(2023, 7, 31).unwrap()));
/// ```
pub fn is_workday(date: NaiveDate) -> bool {
    !get_day_type(date).is_weekend()
}
