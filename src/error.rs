//! Error types for staff records.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure a record, reading or configuration load can produce.

use thiserror::Error;

/// The main error type for the crate.
///
/// # Example
///
/// ```
/// use staff_records::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/payroll.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/payroll.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A delimited employee record did not match `First-Last-Pay`.
    #[error("Invalid employee record '{input}': {message}")]
    Format {
        /// The text that failed to parse.
        input: String,
        /// A description of the expected format.
        message: String,
    },

    /// A temperature fell below the physical lower bound.
    #[error("Temperature {value} is below the minimum of {minimum}")]
    Range {
        /// The rejected value.
        value: f64,
        /// The lowest accepted value.
        minimum: f64,
    },

    /// An operation received an operand of the wrong type.
    #[error("Unsupported operand for {operation}: expected {expected}")]
    TypeMismatch {
        /// The operation that was attempted.
        operation: String,
        /// The operand type the operation accepts.
        expected: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
