//! PTV client error types.

use crate::signing::SignError;

/// Errors from the PTV HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum PtvError {
    /// HTTP request failed (connection refused, timeout, etc.)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// API returned a non-2xx status code
    #[error("HTTP error {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Request could not be signed
    #[error(transparent)]
    Signing(#[from] SignError),
}
