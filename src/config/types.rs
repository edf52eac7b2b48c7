//! Configuration types for the settlement calculator.
//!
//! This module contains the strongly-typed configuration structure that
//! is deserialized from the YAML configuration file.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Default value of one tax unit ("UVT") in pesos.
pub const DEFAULT_TAX_UNIT_VALUE: Decimal = Decimal::from_parts(39205, 0, 0, false, 0);

/// Largest accepted tax unit value (10^15 pesos). Keeps every withholding
/// intermediate inside `Decimal` range.
pub const MAX_TAX_UNIT_VALUE: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Calculator configuration.
///
/// Holds the value of the tax unit ("UVT") used by the withholding rule.
/// The value is fixed for the lifetime of a calculator.
///
/// # Example
///
/// ```
/// use liquidacion_engine::config::CalculatorConfig;
/// use rust_decimal::Decimal;
///
/// let config = CalculatorConfig::default();
/// assert_eq!(config.tax_unit_value(), Decimal::from(39205));
///
/// let custom = CalculatorConfig::new(Decimal::from(47065)).unwrap();
/// assert_eq!(custom.tax_unit_value(), Decimal::from(47065));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Pesos per tax unit.
    #[serde(default = "default_tax_unit_value")]
    tax_unit_value: Decimal,
}

fn default_tax_unit_value() -> Decimal {
    DEFAULT_TAX_UNIT_VALUE
}

impl CalculatorConfig {
    /// Creates a configuration with the given tax unit value.
    ///
    /// Returns `InvalidArgument` if the value is zero or negative, since the
    /// withholding rule divides by it, or if it exceeds [`MAX_TAX_UNIT_VALUE`].
    pub fn new(tax_unit_value: Decimal) -> EngineResult<Self> {
        let config = Self { tax_unit_value };
        config.validate()?;
        Ok(config)
    }

    /// Returns the tax unit value in pesos.
    pub fn tax_unit_value(&self) -> Decimal {
        self.tax_unit_value
    }

    /// Checks the invariants of a configuration built by deserialization.
    pub(crate) fn validate(&self) -> EngineResult<()> {
        if self.tax_unit_value <= Decimal::ZERO {
            return Err(EngineError::invalid_argument(
                "tax_unit_value",
                format!("must be positive, got {}", self.tax_unit_value),
            ));
        }
        if self.tax_unit_value > MAX_TAX_UNIT_VALUE {
            return Err(EngineError::invalid_argument(
                "tax_unit_value",
                format!("must not exceed {}, got {}", MAX_TAX_UNIT_VALUE, self.tax_unit_value),
            ));
        }
        Ok(())
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            tax_unit_value: DEFAULT_TAX_UNIT_VALUE,
        }
    }
}
