//! Employee record model.
//!
//! This module defines the [`Employee`] payroll record. Email and full name
//! are derived from the stored names on every call, and raises read the
//! multiplier from a shared [`Payroll`] context.

use std::any::Any;
use std::fmt;
use std::ops::Add;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Payroll;
use crate::calculation::{RaiseResult, calculate_raise};
use crate::error::{EngineError, EngineResult};

/// Domain used for every derived email address.
pub const EMAIL_DOMAIN: &str = "company.com";

/// Delimiter between the fields of a `First-Last-Pay` record.
pub const RECORD_DELIMITER: char = '-';

const RECORD_FORMAT_MESSAGE: &str = "String format should be 'First-Last-Pay'";

/// A payroll record for one person.
///
/// Names and pay are not validated; negative pay is accepted as given.
///
/// # Example
///
/// ```
/// use staff_records::Payroll;
/// use staff_records::models::Employee;
///
/// let payroll = Payroll::default();
/// let employee = Employee::new(&payroll, "George", "Nikolaou", 30000);
///
/// assert_eq!(employee.full_name(), "George Nikolaou");
/// assert_eq!(employee.email(), "George.Nikolaou@company.com");
/// assert_eq!(employee.to_string(), "George Nikolaou - George.Nikolaou@company.com");
/// assert_eq!(format!("{:?}", employee), "Employee('George', 'Nikolaou', 30000)");
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    first_name: String,
    last_name: String,
    pay: i64,
}

impl Employee {
    /// Creates a record and counts it in the payroll's headcount.
    pub fn new(
        payroll: &Payroll,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        pay: i64,
    ) -> Self {
        let employee = Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            pay,
        };
        let headcount = payroll.register();
        tracing::info!(
            employee = %employee.full_name(),
            pay,
            headcount,
            "Employee record created"
        );
        employee
    }

    /// Builds a record from text of the form `First-Last-Pay`.
    ///
    /// The text must split on `-` into exactly three parts, and the last part
    /// must be a base-10 integer. The record is then built with
    /// [`Employee::new`], so it is counted in the headcount.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Format`] when the text does not have that shape.
    ///
    /// # Example
    ///
    /// ```
    /// use staff_records::Payroll;
    /// use staff_records::models::Employee;
    ///
    /// let payroll = Payroll::default();
    /// let employee = Employee::from_delimited(&payroll, "Maria-Katerina-45000")?;
    /// assert_eq!(
    ///     employee.full_details(),
    ///     "Employee Name: Maria Katerina, Email: Maria.Katerina@company.com, Salary: 45000"
    /// );
    ///
    /// assert!(Employee::from_delimited(&payroll, "bad-input").is_err());
    /// # Ok::<(), staff_records::error::EngineError>(())
    /// ```
    pub fn from_delimited(payroll: &Payroll, text: &str) -> EngineResult<Self> {
        let parts: Vec<&str> = text.split(RECORD_DELIMITER).collect();
        let [first_name, last_name, pay] = parts.as_slice() else {
            return Err(format_error(text, "wrong number of fields"));
        };
        let pay = pay
            .parse::<i64>()
            .map_err(|_| format_error(text, "pay is not an integer"))?;

        Ok(Self::new(payroll, *first_name, *last_name, pay))
    }

    /// Returns the first name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the last name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the current pay.
    pub fn pay(&self) -> i64 {
        self.pay
    }

    /// Returns `{first}.{last}@company.com`.
    pub fn email(&self) -> String {
        format!("{}.{}@{}", self.first_name, self.last_name, EMAIL_DOMAIN)
    }

    /// Returns `{first} {last}`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the number of characters in [`Employee::full_name`].
    pub fn name_len(&self) -> usize {
        self.full_name().chars().count()
    }

    /// Returns the name, email and pay as one line of text.
    pub fn full_details(&self) -> String {
        format!(
            "Employee Name: {}, Email: {}, Salary: {}",
            self.full_name(),
            self.email(),
            self.pay
        )
    }

    /// Applies the payroll's current raise multiplier to this record's pay.
    ///
    /// The new pay is truncated toward zero.
    ///
    /// # Example
    ///
    /// ```
    /// use staff_records::Payroll;
    /// use staff_records::models::Employee;
    ///
    /// let payroll = Payroll::default();
    /// let mut employee = Employee::new(&payroll, "Angeliki", "Zoi", 5000);
    ///
    /// let result = employee.apply_raise(&payroll);
    /// assert_eq!(result.previous_pay, 5000);
    /// assert_eq!(employee.pay(), 5200);
    /// ```
    pub fn apply_raise(&mut self, payroll: &Payroll) -> RaiseResult {
        let result = calculate_raise(self.pay, payroll.raise_multiplier());
        self.pay = result.new_pay;
        tracing::debug!(
            employee = %self.full_name(),
            previous_pay = result.previous_pay,
            new_pay = result.new_pay,
            multiplier = %result.multiplier,
            "Raise applied"
        );
        result
    }

    /// Adds this record's pay to another operand's pay.
    ///
    /// This is the dynamically typed form of `&a + &b`. The operand must be
    /// an `Employee` value (not a reference to one).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TypeMismatch`] for any other operand type.
    ///
    /// # Example
    ///
    /// ```
    /// use staff_records::Payroll;
    /// use staff_records::models::Employee;
    ///
    /// let payroll = Payroll::default();
    /// let a = Employee::new(&payroll, "Angeliki", "Zoi", 5200);
    /// let b = Employee::new(&payroll, "George", "Nikolaou", 33000);
    ///
    /// assert_eq!(a.combine(&b)?, 38200);
    /// assert!(a.combine(&42_i64).is_err());
    /// # Ok::<(), staff_records::error::EngineError>(())
    /// ```
    pub fn combine(&self, other: &dyn Any) -> EngineResult<i64> {
        other
            .downcast_ref::<Employee>()
            .map(|other| self + other)
            .ok_or_else(|| EngineError::TypeMismatch {
                operation: "combine".to_string(),
                expected: "Employee".to_string(),
            })
    }

    /// Returns true if the date falls on Monday through Friday.
    ///
    /// Does not depend on any record; see [`crate::calculation::is_workday`].
    pub fn is_workday(date: NaiveDate) -> bool {
        crate::calculation::is_workday(date)
    }
}

fn format_error(text: &str, reason: &str) -> EngineError {
    tracing::warn!(input = text, reason, "Rejected employee record");
    EngineError::Format {
        input: text.to_string(),
        message: RECORD_FORMAT_MESSAGE.to_string(),
    }
}

impl Add for &Employee {
    type Output = i64;

    /// Sums the pay of two records, saturating on overflow.
    fn add(self, other: Self) -> i64 {
        self.pay.saturating_add(other.pay)
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.full_name(), self.email())
    }
}

impl fmt::Debug for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Employee('{}', '{}', {})",
            self.first_name, self.last_name, self.pay
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn create_test_employee(payroll: &Payroll) -> Employee {
        Employee::new(payroll, "Angeliki", "Zoi", 5000)
    }

    #[test]
    fn test_new_increments_headcount() {
        let payroll = Payroll::default();
        create_test_employee(&payroll);
        Employee::new(&payroll, "George", "Nikolaou", 30000);
        assert_eq!(payroll.headcount(), 2);
    }

    #[test]
    fn test_accessors_return_fields() {
        let payroll = Payroll::default();
        let employee = create_test_employee(&payroll);
        assert_eq!(employee.first_name(), "Angeliki");
        assert_eq!(employee.last_name(), "Zoi");
        assert_eq!(employee.pay(), 5000);
    }

    #[test]
    fn test_email_and_full_name() {
        let payroll = Payroll::default();
        let employee = create_test_employee(&payroll);
        assert_eq!(employee.email(), "Angeliki.Zoi@company.com");
        assert_eq!(employee.full_name(), "Angeliki Zoi");
    }

    #[test]
    fn test_negative_pay_is_accepted() {
        let payroll = Payroll::default();
        let employee = Employee::new(&payroll, "Neg", "Pay", -100);
        assert_eq!(employee.pay(), -100);
    }

    #[test]
    fn test_apply_raise_uses_default_multiplier() {
        let payroll = Payroll::default();
        let mut employee = create_test_employee(&payroll);
        employee.apply_raise(&payroll);
        assert_eq!(employee.pay(), 5200);
    }

    #[test]
    fn test_apply_raise_reads_current_multiplier() {
        let payroll = Payroll::default();
        let mut employee = Employee::new(&payroll, "George", "Nikolaou", 30000);

        // Changed after construction; the record must see the new value.
        payroll.set_raise_multiplier(Decimal::new(110, 2));
        let result = employee.apply_raise(&payroll);

        assert_eq!(employee.pay(), 33000);
        assert_eq!(result.multiplier, Decimal::new(110, 2));
    }

    #[test]
    fn test_repeated_raises_compound() {
        let payroll = Payroll::default();
        let mut employee = create_test_employee(&payroll);
        employee.apply_raise(&payroll);
        employee.apply_raise(&payroll);
        // 5000 -> 5200 -> 5408
        assert_eq!(employee.pay(), 5408);
    }

    #[test]
    fn test_full_details_format() {
        let payroll = Payroll::default();
        let employee = Employee::new(&payroll, "Maria", "Katerina", 45000);
        assert_eq!(
            employee.full_details(),
            "Employee Name: Maria Katerina, Email: Maria.Katerina@company.com, Salary: 45000"
        );
    }

    #[test]
    fn test_from_delimited_valid() {
        let payroll = Payroll::default();
        let employee = Employee::from_delimited(&payroll, "Maria-Katerina-45000").unwrap();
        assert_eq!(employee.first_name(), "Maria");
        assert_eq!(employee.last_name(), "Katerina");
        assert_eq!(employee.pay(), 45000);
        assert_eq!(payroll.headcount(), 1);
    }

    #[test]
    fn test_from_delimited_two_parts_is_format_error() {
        let payroll = Payroll::default();
        match Employee::from_delimited(&payroll, "bad-input") {
            Err(EngineError::Format { input, message }) => {
                assert_eq!(input, "bad-input");
                assert_eq!(message, "String format should be 'First-Last-Pay'");
            }
            other => panic!("Expected Format error, got {:?}", other),
        }
        assert_eq!(payroll.headcount(), 0);
    }

    #[test]
    fn test_from_delimited_four_parts_is_format_error() {
        let payroll = Payroll::default();
        let result = Employee::from_delimited(&payroll, "Anna-Maria-Smith-100");
        assert!(matches!(result, Err(EngineError::Format { .. })));
    }

    #[test]
    fn test_from_delimited_non_numeric_pay_is_format_error() {
        let payroll = Payroll::default();
        let result = Employee::from_delimited(&payroll, "Maria-Katerina-lots");
        assert!(matches!(result, Err(EngineError::Format { .. })));
    }

    #[test]
    fn test_from_delimited_fractional_pay_is_format_error() {
        let payroll = Payroll::default();
        let result = Employee::from_delimited(&payroll, "Maria-Katerina-450.50");
        assert!(matches!(result, Err(EngineError::Format { .. })));
    }

    #[test]
    fn test_from_delimited_empty_is_format_error() {
        let payroll = Payroll::default();
        assert!(Employee::from_delimited(&payroll, "").is_err());
    }

    #[test]
    fn test_add_sums_pay() {
        let payroll = Payroll::default();
        let a = create_test_employee(&payroll);
        let b = Employee::new(&payroll, "George", "Nikolaou", 30000);
        assert_eq!(&a + &b, 35000);
    }

    #[test]
    fn test_add_saturates() {
        let payroll = Payroll::default();
        let a = Employee::new(&payroll, "Big", "Pay", i64::MAX);
        let b = Employee::new(&payroll, "More", "Pay", 1);
        assert_eq!(&a + &b, i64::MAX);
    }

    #[test]
    fn test_combine_with_employee() {
        let payroll = Payroll::default();
        let a = create_test_employee(&payroll);
        let b = Employee::new(&payroll, "George", "Nikolaou", 30000);
        assert_eq!(a.combine(&b).unwrap(), 35000);
    }

    #[test]
    fn test_combine_with_other_type_is_type_mismatch() {
        let payroll = Payroll::default();
        let a = create_test_employee(&payroll);

        match a.combine(&"Angeliki Zoi") {
            Err(EngineError::TypeMismatch { operation, expected }) => {
                assert_eq!(operation, "combine");
                assert_eq!(expected, "Employee");
            }
            other => panic!("Expected TypeMismatch, got {:?}", other),
        }
        assert!(a.combine(&5000_i64).is_err());
    }

    #[test]
    fn test_name_len_counts_characters() {
        let payroll = Payroll::default();
        let employee = Employee::new(&payroll, "Maria", "Katerina", 45000);
        assert_eq!(employee.name_len(), 14);
    }

    #[test]
    fn test_name_len_counts_chars_not_bytes() {
        let payroll = Payroll::default();
        let employee = Employee::new(&payroll, "Αγγελική", "Ζωή", 5000);
        assert_eq!(employee.name_len(), 12);
    }

    #[test]
    fn test_display_format() {
        let payroll = Payroll::default();
        let employee = create_test_employee(&payroll);
        assert_eq!(employee.to_string(), "Angeliki Zoi - Angeliki.Zoi@company.com");
    }

    #[test]
    fn test_debug_format_reads_as_constructor_call() {
        let payroll = Payroll::default();
        let employee = create_test_employee(&payroll);
        assert_eq!(format!("{:?}", employee), "Employee('Angeliki', 'Zoi', 5000)");
    }

    #[test]
    fn test_is_workday_associated_fn() {
        // 2023-07-30 is a Sunday
        assert!(!Employee::is_workday(NaiveDate::from_ymd_opt(2023, 7, 30).unwrap()));
        assert!(Employee::is_workday(NaiveDate::from_ymd_opt(2023, 7, 31).unwrap()));
    }

    #[test]
    fn test_serialize_employee() {
        let payroll = Payroll::default();
        let employee = create_test_employee(&payroll);
        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "first_name": "Angeliki",
                "last_name": "Zoi",
                "pay": 5000
            })
        );
    }

    #[test]
    fn test_deserialize_does_not_touch_headcount() {
        let payroll = Payroll::default();
        let json = r#"{"first_name": "George", "last_name": "Nikolaou", "pay": 30000}"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.full_name(), "George Nikolaou");
        assert_eq!(payroll.headcount(), 0);
    }
}
