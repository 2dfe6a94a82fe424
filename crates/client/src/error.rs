//! Client error types.

use holidays_core::holiday::{EnvelopeError, HolidayError};
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network failure or non-2xx status.
    #[error("Fetch failed for {endpoint}: {message}")]
    FetchFailed {
        endpoint: &'static str,
        status: Option<u16>,
        message: String,
    },

    /// Malformed JSON or an envelope without a usable `result`.
    #[error("Invalid response from {endpoint}: {message}")]
    DecodeFailed {
        endpoint: &'static str,
        message: String,
    },

    #[error("No country selected")]
    MissingSelection,

    /// The HTTP client could not be built from the configuration.
    #[error("Client setup failed: {0}")]
    Setup(String),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    pub(crate) fn fetch(endpoint: &'static str, err: &reqwest::Error) -> Self {
        ClientError::FetchFailed {
            endpoint,
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }

    pub(crate) fn decode(endpoint: &'static str, message: impl ToString) -> Self {
        ClientError::DecodeFailed {
            endpoint,
            message: message.to_string(),
        }
    }

    pub(crate) fn envelope(endpoint: &'static str, err: EnvelopeError) -> Self {
        Self::decode(endpoint, err)
    }
}

impl From<HolidayError> for ClientError {
    fn from(err: HolidayError) -> Self {
        match err {
            HolidayError::MissingSelection => ClientError::MissingSelection,
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for ClientError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ClientError::Export(err.to_string())
    }
}
