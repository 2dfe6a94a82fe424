use thiserror::Error;

/// Errors that can occur while building holiday queries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HolidayError {
    #[error("No country selected")]
    MissingSelection,
}

/// Errors that can occur when unwrapping an API response envelope.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnvelopeError {
    #[error("Response has no result field")]
    MissingResult,
    #[error("Server reported failure: {0}")]
    ServerReported(String),
}
