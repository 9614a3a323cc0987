//! Shared payroll context.
//!
//! A [`Payroll`] holds the state every record built through it shares: the
//! current raise multiplier and a headcount of records created. Clones share
//! the same state, while separate contexts are isolated from each other.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use rust_decimal::Decimal;

use crate::config::PayrollConfig;
use crate::error::EngineResult;
use crate::models::Employee;

#[derive(Debug)]
struct Shared {
    raise_multiplier: RwLock<Decimal>,
    headcount: AtomicU64,
}

/// Context shared by a group of employee records.
///
/// Raises always read the multiplier current at the time of the raise, so
/// changing it affects the next raise of every record, including ones built
/// before the change.
///
/// # Example
///
/// ```
/// use staff_records::Payroll;
/// use staff_records::models::Employee;
/// use rust_decimal::Decimal;
///
/// let payroll = Payroll::default();
/// let mut employee = Employee::new(&payroll, "George", "Nikolaou", 30000);
///
/// payroll.set_raise_multiplier(Decimal::new(110, 2));
/// employee.apply_raise(&payroll);
/// assert_eq!(employee.pay(), 33000);
/// assert_eq!(payroll.headcount(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Payroll {
    shared: Arc<Shared>,
}

impl Payroll {
    /// Creates a new context from the given configuration.
    pub fn new(config: PayrollConfig) -> Self {
        Self {
            shared: Arc::new(Shared {
                raise_multiplier: RwLock::new(config.raise_multiplier),
                headcount: AtomicU64::new(0),
            }),
        }
    }

    /// Returns the raise multiplier currently in effect.
    pub fn raise_multiplier(&self) -> Decimal {
        *self.shared.raise_multiplier.read()
    }

    /// Replaces the raise multiplier for every record using this context.
    pub fn set_raise_multiplier(&self, multiplier: Decimal) {
        let previous = std::mem::replace(&mut *self.shared.raise_multiplier.write(), multiplier);
        tracing::info!(
            previous = %previous,
            raise_multiplier = %multiplier,
            "Raise multiplier updated"
        );
    }

    /// Returns the number of records built through this context.
    pub fn headcount(&self) -> u64 {
        self.shared.headcount.load(Ordering::Relaxed)
    }

    /// Builds a record from `First-Last-Pay` text.
    ///
    /// Shorthand for [`Employee::from_delimited`].
    pub fn parse_employee(&self, text: &str) -> EngineResult<Employee> {
        Employee::from_delimited(self, text)
    }

    /// Records a newly built employee and returns the new headcount.
    pub(crate) fn register(&self) -> u64 {
        self.shared.headcount.fetch_add(1, Ordering::Relaxed) + 1
    }
}

impl Default for Payroll {
    fn default() -> Self {
        Self::new(PayrollConfig::default())
    }
}
