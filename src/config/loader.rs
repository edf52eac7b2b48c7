//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the calculator
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::CalculatorConfig;

/// Loads and provides access to the calculator configuration.
///
/// # File Format
///
/// ```text
/// # config/calculator.yaml
/// tax_unit_value: 39205
/// ```
///
/// # Example
///
/// ```no_run
/// use liquidacion_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/calculator.yaml")?;
/// println!("UVT: {}", loader.config().tax_unit_value());
/// # Ok::<(), liquidacion_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalculatorConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// Returns `ConfigNotFound` if the file cannot be read, and
    /// `ConfigParseError` if it is not valid YAML or carries a
    /// non-positive tax unit value.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let config = Self::load_yaml(path)?;

        info!(
            path = %path.display(),
            tax_unit_value = %config.tax_unit_value(),
            "Loaded calculator configuration"
        );

        Ok(Self { config })
    }

    /// Reads, parses and validates a YAML file.
    fn load_yaml(path: &Path) -> EngineResult<CalculatorConfig> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: CalculatorConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        config
            .validate()
            .map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(config)
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> CalculatorConfig {
        self.config
    }
}
