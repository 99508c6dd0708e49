//! Custom error types for spendlog
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::amount::AmountParseError;
use crate::models::category::CategoryParseError;

/// The main error type for spendlog operations
#[derive(Error, Debug)]
pub enum SpendlogError {
    /// Validation errors for transaction input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Category name is not in the allowed set
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Amount string could not be parsed
    #[error("Amount error: {0}")]
    Amount(#[from] AmountParseError),

    /// Timestamp string could not be parsed back into a point in time
    #[error("Timestamp error: {0}")]
    Timestamp(String),

    /// Selected index does not refer to a stored transaction
    #[error("Invalid selection: index {index} out of range for {len} transaction(s)")]
    InvalidSelection { index: usize, len: usize },
}

impl SpendlogError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an invalid-selection error
    pub fn is_invalid_selection(&self) -> bool {
        matches!(self, Self::InvalidSelection { .. })
    }
}

impl From<CategoryParseError> for SpendlogError {
    fn from(err: CategoryParseError) -> Self {
        Self::UnknownCategory(err.name().to_string())
    }
}

impl From<chrono::ParseError> for SpendlogError {
    fn from(err: chrono::ParseError) -> Self {
        Self::Timestamp(err.to_string())
    }
}

/// Result type alias for spendlog operations
pub type SpendlogResult<T> = Result<T, SpendlogError>;
