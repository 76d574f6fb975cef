//! Departure selection error types.

/// Errors from the departure selector.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    /// Scheduled departure could not be parsed as an RFC 3339 instant
    #[error("invalid scheduled departure timestamp {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        source: chrono::ParseError,
    },
}
