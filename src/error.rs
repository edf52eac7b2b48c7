//! Error types for the settlement engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing a settlement.

use thiserror::Error;

/// The main error type for the settlement engine.
///
/// Every failure is raised at the point of violation and propagated to the
/// caller unchanged; no operation returns a partial result.
///
/// # Example
///
/// ```
/// use liquidacion_engine::error::EngineError;
///
/// let error = EngineError::InvalidArgument {
///     field: "base_salary".to_string(),
///     message: "must not be negative".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid argument 'base_salary': must not be negative");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A numeric argument was outside its allowed range.
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument {
        /// The name of the offending argument.
        field: String,
        /// A description of what made the argument invalid.
        message: String,
    },

    /// A date string did not match the day/month/year format.
    #[error("Failed to parse date '{input}': {message}")]
    ParseError {
        /// The raw text that failed to parse.
        input: String,
        /// A description of the parse error.
        message: String,
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

impl EngineError {
    /// Shorthand for building an [`EngineError::InvalidArgument`].
    pub fn invalid_argument(field: &str, message: impl Into<String>) -> Self {
        EngineError::InvalidArgument {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
