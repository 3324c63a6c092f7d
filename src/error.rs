//! Custom error types for spendlog
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for spendlog operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Category input does not normalize to a registry member
    #[error("Invalid category: '{value}'. Valid categories are: {}", .valid.join(", "))]
    InvalidCategory {
        value: String,
        valid: &'static [&'static str],
    },

    /// Edit/delete target does not exist
    #[error("No expense found with ID {0}")]
    NotFound(u64),

    /// Date input for a filter does not parse
    #[error("Invalid date format: '{input}'. Use {expected}")]
    InvalidDateFormat {
        input: String,
        expected: &'static str,
    },

    /// Amount range input does not parse as a number
    #[error("Invalid amount: '{0}'. Expected a number")]
    InvalidAmountFormat(String),

    /// Summary month outside 1-12
    #[error("Invalid month: {0}. Use a value from 1 to 12")]
    InvalidMonth(u32),
}

impl ExpenseError {
    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if this error is a user-input condition the CLI renders as a
    /// message instead of aborting the process
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_)
                | Self::InvalidCategory { .. }
                | Self::InvalidDateFormat { .. }
                | Self::InvalidAmountFormat(_)
                | Self::InvalidMonth(_)
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for spendlog operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
