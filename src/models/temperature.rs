//! Validated temperature reading.

use serde::Serialize;

use crate::error::{EngineError, EngineResult};

/// A temperature in degrees Celsius, validated on every write.
///
/// The value can only be changed through [`Celsius::set`], which rejects
/// anything below [`Celsius::MINIMUM`].
///
/// # Example
///
/// ```
/// use staff_records::models::Celsius;
///
/// let mut reading = Celsius::new(37.0)?;
/// assert!((reading.to_fahrenheit() - 98.6).abs() < 1e-9);
///
/// assert!(reading.set(-276.0).is_err());
/// assert_eq!(reading.get(), 37.0);
/// # Ok::<(), staff_records::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Celsius {
    degrees: f64,
}

impl Celsius {
    /// The lowest accepted temperature.
    pub const MINIMUM: f64 = -275.0;

    /// Creates a reading, running the same validation as [`Celsius::set`].
    pub fn new(degrees: f64) -> EngineResult<Self> {
        let mut reading = Self::default();
        reading.set(degrees)?;
        Ok(reading)
    }

    /// Returns the current temperature.
    pub fn get(&self) -> f64 {
        tracing::trace!(degrees = self.degrees, "Reading temperature");
        self.degrees
    }

    /// Replaces the temperature.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Range`] if `degrees` is below the minimum or is
    /// NaN. The stored value is left unchanged.
    pub fn set(&mut self, degrees: f64) -> EngineResult<()> {
        if degrees.is_nan() || degrees < Self::MINIMUM {
            tracing::warn!(degrees, minimum = Self::MINIMUM, "Rejected temperature");
            return Err(EngineError::Range {
                value: degrees,
                minimum: Self::MINIMUM,
            });
        }

        tracing::debug!(degrees, "Setting temperature");
        self.degrees = degrees;
        Ok(())
    }

    /// Returns the temperature converted to degrees Fahrenheit.
    pub fn to_fahrenheit(&self) -> f64 {
        self.degrees * 1.8 + 32.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Celsius::default().get(), 0.0);
    }

    #[test]
    fn test_minimum_is_accepted() {
        assert_eq!(Celsius::new(-275.0).unwrap().get(), -275.0);
    }

    #[test]
    fn test_below_minimum_at_construction_is_range_error() {
        match Celsius::new(-275.5) {
            Err(EngineError::Range { value, minimum }) => {
                assert_eq!(value, -275.5);
                assert_eq!(minimum, -275.0);
            }
            other => panic!("Expected Range error, got {:?}", other),
        }
    }

    #[test]
    fn test_set_below_minimum_is_range_error() {
        let mut reading = Celsius::default();
        assert!(matches!(
            reading.set(-276.0),
            Err(EngineError::Range { .. })
        ));
    }

    #[test]
    fn test_failed_set_keeps_previous_value() {
        let mut reading = Celsius::new(21.5).unwrap();
        assert!(reading.set(-300.0).is_err());
        assert_eq!(reading.get(), 21.5);
    }

    #[test]
    fn test_set_commits_valid_value() {
        let mut reading = Celsius::default();
        reading.set(100.0).unwrap();
        assert_eq!(reading.get(), 100.0);
    }

    #[test]
    fn test_nan_is_rejected() {
        assert!(Celsius::new(f64::NAN).is_err());
    }

    #[test]
    fn test_body_temperature_in_fahrenheit() {
        assert!(approx_eq(Celsius::new(37.0).unwrap().to_fahrenheit(), 98.6));
    }

    #[test]
    fn test_freezing_and_boiling_points() {
        assert!(approx_eq(Celsius::default().to_fahrenheit(), 32.0));
        assert!(approx_eq(Celsius::new(100.0).unwrap().to_fahrenheit(), 212.0));
    }

    #[test]
    fn test_fahrenheit_follows_set() {
        let mut reading = Celsius::default();
        reading.set(-40.0).unwrap();
        assert!(approx_eq(reading.to_fahrenheit(), -40.0));
    }

    #[test]
    fn test_serialize_reading() {
        let reading = Celsius::new(37.0).unwrap();
        assert_eq!(
            serde_json::to_string(&reading).unwrap(),
            r#"{"degrees":37.0}"#
        );
    }
}
