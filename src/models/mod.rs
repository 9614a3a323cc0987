//! Core data models.
//!
//! This module contains the payroll record and the validated temperature
//! reading.

mod employee;
mod temperature;

pub use employee::{EMAIL_DOMAIN, Employee, RECORD_DELIMITER};
pub use temperature::Celsius;
