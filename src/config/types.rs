//! Configuration types for payroll contexts.
//!
//! This module contains the strongly-typed configuration structure that
//! is deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

/// The raise multiplier used when no configuration overrides it (a 4% raise).
pub const DEFAULT_RAISE_MULTIPLIER: Decimal = Decimal::from_parts(104, 0, 0, false, 2);

/// Settings shared by every record built through one payroll context.
///
/// Keys missing from the YAML document fall back to their defaults.
///
/// # Example
///
/// ```
/// use staff_records::config::{PayrollConfig, DEFAULT_RAISE_MULTIPLIER};
///
/// let config = PayrollConfig::default();
/// assert_eq!(config.raise_multiplier, DEFAULT_RAISE_MULTIPLIER);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    /// Multiplier applied to pay when a raise is granted.
    pub raise_multiplier: Decimal,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            raise_multiplier: DEFAULT_RAISE_MULTIPLIER,
        }
    }
}
