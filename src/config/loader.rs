//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::PayrollConfig;

/// Loads and provides access to payroll configuration.
///
/// # File Format
///
/// ```text
/// # config/payroll.yaml
/// raise_multiplier: "1.04"
/// ```
///
/// # Example
///
/// ```no_run
/// use staff_records::Payroll;
/// use staff_records::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll.yaml")?;
/// let payroll = Payroll::new(loader.into_config());
/// # Ok::<(), staff_records::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML or an unparseable value (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::parse(&content, path_str)?;
        tracing::info!(
            path = %path.display(),
            raise_multiplier = %loader.config.raise_multiplier,
            "Loaded payroll configuration"
        );
        Ok(loader)
    }

    /// Parses configuration from an in-memory YAML document.
    ///
    /// # Example
    ///
    /// ```
    /// use staff_records::config::ConfigLoader;
    /// use rust_decimal::Decimal;
    ///
    /// let loader = ConfigLoader::from_yaml_str("raise_multiplier: \"1.10\"")?;
    /// assert_eq!(loader.config().raise_multiplier, Decimal::new(110, 2));
    /// # Ok::<(), staff_records::error::EngineError>(())
    /// ```
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Self::parse(content, "<inline>".to_string())
    }

    fn parse(content: &str, path: String) -> EngineResult<Self> {
        let config = serde_yaml::from_str::<PayrollConfig>(content).map_err(|e| {
            EngineError::ConfigParseError {
                path,
                message: e.to_string(),
            }
        })?;

        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> PayrollConfig {
        self.config
    }
}
