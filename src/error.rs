//! Errors for ajwt
//!
//! Every failure in the encode and decode pipelines is surfaced as a distinct
//! [`Error`] variant. [`Error::kind`] collapses the variants into the four
//! kinds callers usually branch on.

use thiserror::Error;

/// ajwt Errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Invalid token: {0}")]
    InvalidInput(String),

    #[error("Token too large: {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge { size: usize, max: usize },

    // ============================================================================
    // Signature Errors
    // ============================================================================
    #[error("Signature verification failed")]
    InvalidSignature,

    // ============================================================================
    // Payload Errors
    // ============================================================================
    #[error("Invalid payload: {0}")]
    InvalidPayload(#[from] PayloadError),

    #[error("Payload cannot be encoded: {0}")]
    UnencodablePayload(String),
}

/// Reasons a signed payload is rejected after its signature checked out
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PayloadError {
    #[error("malformed JSON: {0}")]
    Malformed(String),

    #[error("payload is not a JSON object")]
    NotAnObject,

    #[error("missing required keys: {}", .0.join(", "))]
    MissingKeys(Vec<String>),

    #[error("timestamp {0} is not an integer")]
    TimestampNotInteger(String),

    #[error("timestamp {timestamp} has expired (validity: {validity}s, now: {now})")]
    Expired {
        timestamp: i64,
        validity: u64,
        now: i64,
    },

    #[error("timestamp {timestamp} is in the future (now: {now})")]
    IssuedInFuture { timestamp: i64, now: i64 },
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Not a token issued by this system (framing or base64)
    InvalidInput,
    /// Tampered token or wrong key
    InvalidSignature,
    /// Authentic token whose content was rejected
    InvalidPayload,
    /// Encode-side only: the caller's payload has no JSON form
    UnencodablePayload,
}

impl Error {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidInput(_) | Error::TokenTooLarge { .. } => ErrorKind::InvalidInput,
            Error::InvalidSignature => ErrorKind::InvalidSignature,
            Error::InvalidPayload(_) => ErrorKind::InvalidPayload,
            Error::UnencodablePayload(_) => ErrorKind::UnencodablePayload,
        }
    }
}

/// Result type alias for ajwt operations
pub type Result<T> = std::result::Result<T, Error>;
