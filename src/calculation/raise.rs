//! Raise calculation.
//!
//! This module applies a raise multiplier to a whole-unit pay amount. The
//! multiplication is done in [`Decimal`] so that common multipliers such as
//! `1.04` and `1.10` produce exact results before truncation.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// The result of applying a raise to a pay amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaiseResult {
    /// The pay before the raise.
    pub previous_pay: i64,
    /// The pay after the raise, truncated toward zero.
    pub new_pay: i64,
    /// The multiplier that was applied.
    pub multiplier: Decimal,
}

impl RaiseResult {
    /// Returns the change in pay caused by the raise.
    pub fn increase(&self) -> i64 {
        self.new_pay.saturating_sub(self.previous_pay)
    }
}

/// Calculates the pay that results from applying `multiplier` to `pay`.
///
/// The product is truncated toward zero. A product that does not fit in an
/// `i64` saturates at `i64::MAX` or `i64::MIN`.
///
/// # Example
///
/// ```
/// use staff_records::calculation::calculate_raise;
/// use rust_decimal::Decimal;
///
/// let result = calculate_raise(5000, Decimal::new(104, 2));
/// assert_eq!(result.new_pay, 5200);
/// assert_eq!(result.increase(), 200);
/// ```
pub fn calculate_raise(pay: i64, multiplier: Decimal) -> RaiseResult {
    let new_pay = Decimal::from(pay)
        .checked_mul(multiplier)
        .and_then(|product| product.trunc().to_i64())
        .unwrap_or_else(|| {
            let saturated = if (pay < 0) != multiplier.is_sign_negative() {
                i64::MIN
            } else {
                i64::MAX
            };
            tracing::warn!(
                pay,
                multiplier = %multiplier,
                saturated,
                "Raised pay out of range, saturating"
            );
            saturated
        });

    RaiseResult {
        previous_pay: pay,
        new_pay,
        multiplier,
    }
}
