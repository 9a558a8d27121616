//! Core error types for the Equidash holdings pipeline.
//!
//! Every stage of the pipeline is pure, so these errors describe bad input
//! rather than failed I/O. Per-record failures are collected by batch
//! derivation instead of aborting the whole list.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the holdings pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A currency-formatted string could not be parsed into an amount.
    /// Carries the offending display string verbatim.
    #[error("Malformed monetary amount: '{0}'")]
    MalformedAmount(String),

    #[error("Currency mismatch in {context}: expected '{expected}', found '{found}'")]
    CurrencyMismatch {
        context: String,
        expected: char,
        found: char,
    },

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Validation errors for settings and view queries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown sort field '{0}'")]
    UnknownSortField(String),
}
