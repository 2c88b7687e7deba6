use thiserror::Error;

/// Error type for token operations.
///
/// The decode variants are internal detail: callers exposing tokens over a
/// public surface collapse all of them into a single authentication failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Malformed token: {0}")]
    Malformed(String),

    #[error("Token signature mismatch")]
    BadSignature,

    #[error("Token is expired")]
    Expired,
}
