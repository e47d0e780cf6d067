//! Error types for the Budget Allocation & Authorization Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Only malformed input and configuration problems are errors; business-rule
//! outcomes (an unbalanced split, a detected exception, a blocked routing
//! step) are ordinary return values and never surface here.

use thiserror::Error;

/// The main error type for the engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use suprimento_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// No tax-rate table was found for the given fiscal year.
    #[error("Tax rates not found for fiscal year {fiscal_year}")]
    TaxRatesNotFound {
        /// The fiscal year for which rates were requested.
        fiscal_year: i32,
    },

    /// An input value was malformed (negative currency, negative percentage).
    ///
    /// Callers must not proceed with any computed result when this is raised.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
