//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure a calculation can report. Validation failures and
//! degenerate-input failures are kept distinct: the former are caught before
//! any computation starts, the latter only surface once otherwise valid
//! inputs interact (for example an all-zero month table).

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use edupay_engine::error::EngineError;
///
/// let error = EngineError::StepNotFound { step: 41 };
/// assert_eq!(error.to_string(), "Pay step not found: 41 (expected 1-40)");
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

    /// Configuration parsed but violates a structural rule.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the violated rule.
        message: String,
    },

    /// The requested pay step is outside the schedule.
    #[error("Pay step not found: {step} (expected 1-40)")]
    StepNotFound {
        /// The step that was requested.
        step: u32,
    },

    /// A required input was missing, non-positive or otherwise invalid.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The input field that failed validation.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Day classification produced no dates, so there is nothing to aggregate.
    #[error("No calendar days were classified for the contract period")]
    EmptyClassification,

    /// Inputs were individually valid but combine into something that cannot
    /// be computed (zero total work hours, zero monthly hours basis).
    #[error("Degenerate input: {message}")]
    DegenerateInput {
        /// A description of the degenerate condition.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for building an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for building an [`EngineError::DegenerateInput`].
    pub fn degenerate(message: impl Into<String>) -> Self {
        EngineError::DegenerateInput {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
