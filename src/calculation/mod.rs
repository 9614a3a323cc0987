//! Calculation logic for payroll records.
//!
//! This module contains the raise calculation and day detection used to
//! decide whether a date is a workday.

mod day_detection;
mod raise;

pub use day_detection::{DayType, get_day_type, is_workday};
pub use raise::{RaiseResult, calculate_raise};
