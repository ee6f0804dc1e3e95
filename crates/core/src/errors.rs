//! Core error types for Folioview.
//!
//! The grouping transform itself never fails. Errors come from loading a
//! snapshot, from configuration, and from the strict metrics API.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio view.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Metrics calculation failed: {0}")]
    Calculation(#[from] CalculatorError),

    #[error("Failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

/// Errors raised while deriving display metrics for a position.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("Average entry price is zero for {symbol}; gain cannot be computed")]
    ZeroEntryPrice { symbol: String },

    #[error("Calculation failed: {0}")]
    Calculation(String),
}

/// Validation errors for snapshot parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Malformed snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::Json(err))
    }
}
