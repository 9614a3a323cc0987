//! Staff records
//!
//! This crate provides a payroll record type whose raises follow a shared,
//! mutable multiplier, and a temperature reading that is validated on every
//! write.
//!
//! # Example
//!
//! ```
//! use staff_records::Payroll;
//! use staff_records::models::Employee;
//!
//! let payroll = Payroll::default();
//! let mut employee = Employee::new(&payroll, "Angeliki", "Zoi", 5000);
//! employee.apply_raise(&payroll);
//! assert_eq!(employee.pay(), 5200);
//! ```

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
mod payroll;

pub use payroll::Payroll;
