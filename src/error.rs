//! Custom error types for Tally
//!
//! This module defines the error hierarchy for the ledger using thiserror.
//! Every variant is recoverable: the caller reports it and the ledger is left
//! exactly as it was before the failing call.

use thiserror::Error;

/// The main error type for Tally operations
#[derive(Error, Debug)]
pub enum TallyError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Missing or malformed transaction input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),
}

impl TallyError {
    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Create the validation error reported when required fields are empty
    pub fn missing_fields(fields: &[&str]) -> Self {
        Self::Validation(format!(
            "Please fill in all fields (missing: {})",
            fields.join(", ")
        ))
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for TallyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for Tally operations
pub type TallyResult<T> = Result<T, TallyError>;
