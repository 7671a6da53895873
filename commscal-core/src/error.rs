//! Error types for the commscal ecosystem.

use thiserror::Error;

/// Contract violations caught while normalizing a source entry.
///
/// These are raised at the boundary only; bucketing and layout never fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Entry is missing required field '{0}'")]
    MissingField(&'static str),

    #[error("Entry '{id}' has an invalid {field} timestamp: '{value}'")]
    InvalidTimestamp {
        id: String,
        field: &'static str,
        value: String,
    },
}

/// Errors that can occur in commscal operations.
#[derive(Error, Debug)]
pub enum CommsCalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Entry parse error: {0}")]
    EntryParse(String),

    #[error("Invalid calendar view '{0}'. Expected day, week or month")]
    InvalidView(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Result type alias for commscal operations.
pub type CommsCalResult<T> = Result<T, CommsCalError>;
