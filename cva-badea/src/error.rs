//! Error types for the BADEA feed library
use thiserror::Error;

/// Failure to retrieve the raw feed. Never cached; the caller has to retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network or transport failure, including timeouts and undecodable bodies
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The endpoint answered with a non-2xx status
    #[error("Feed request returned status {0}")]
    Status(u16),

    /// The endpoint answered 2xx with nothing in it
    #[error("Feed response body was empty")]
    EmptyBody,
}

#[cfg(feature = "api")]
impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FetchError::Status(status.as_u16()),
            None => FetchError::Request(err.to_string()),
        }
    }
}

/// Why a single feed row was left out of the normalized table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    /// The row does not split into as many fields as the header
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    /// The outer CSV layer saw more than one column (unquoted comma)
    #[error("row contains an unquoted comma")]
    StrayDelimiter,

    /// A required text field is blank
    #[error("empty {0} field")]
    EmptyField(&'static str),

    /// The region is neither the aggregate nor one of the eight provinces
    #[error("unknown region {0:?}")]
    UnknownRegion(String),

    /// The diagnosis date is not a valid DD/MM/YYYY calendar date
    #[error("invalid diagnosis date {0:?}")]
    DateParse(String),

    /// The value is not an integer
    #[error("invalid integer value {0:?}")]
    ValueParse(String),
}

/// Main error type for BADEA operations
#[derive(Error, Debug)]
pub enum BadeaError {
    /// Fetching the feed failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Failed to read CSV data
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The header is missing or does not declare the required columns
    #[error("Invalid feed header: {0}")]
    InvalidHeader(String),

    /// A snapshot file could not be read back
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// Failed to read or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using BadeaError
pub type Result<T> = std::result::Result<T, BadeaError>;
