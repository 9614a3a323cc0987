//! Configuration loading for payroll contexts.
//!
//! This module provides functionality to load the shared payroll settings,
//! such as the raise multiplier, from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use staff_records::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Raise multiplier: {}", loader.config().raise_multiplier);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_RAISE_MULTIPLIER, PayrollConfig};
