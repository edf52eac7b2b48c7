//! Configuration loading and management for the settlement engine.
//!
//! The only configurable value is the tax unit ("UVT") used by the
//! withholding rule. It can be set in code or loaded from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use liquidacion_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/calculator.yaml").unwrap();
//! println!("UVT: {}", config.config().tax_unit_value());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalculatorConfig, DEFAULT_TAX_UNIT_VALUE, MAX_TAX_UNIT_VALUE};
