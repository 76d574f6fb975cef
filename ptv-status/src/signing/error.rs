//! Signing error types.

/// Errors raised while building a signed request URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignError {
    /// A signing input was empty or absent
    #[error("missing credential: {0}")]
    MissingCredential(&'static str),

    /// The MAC rejected the developer key
    #[error("developer key cannot be used as an HMAC key")]
    InvalidKey,
}
