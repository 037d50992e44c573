//! Fund domain errors

use thiserror::Error;

/// Errors surfaced by a fund store
///
/// Not-found is not an error here: lookups return `Ok(None)` so callers can
/// tell a missing fund apart from a failed query.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Fund store unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed fund record: {0}")]
    Malformed(String),
}

impl StoreError {
    /// Returns the underlying message without the variant prefix
    pub fn detail(&self) -> &str {
        match self {
            StoreError::Unavailable(msg) | StoreError::Malformed(msg) => msg,
        }
    }
}

/// Errors from parsing presentation parameters
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FundError {
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("Unknown sort direction: {0}")]
    UnknownSortDirection(String),
}
