//! Base64 encoding/decoding per RFC 4648 section 4
//!
//! This module provides a thin wrapper around the `base64` crate using the
//! standard alphabet with padding. Decoding is strict: missing padding,
//! non-alphabet characters and non-canonical trailing bits are rejected.

use crate::error::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine};

/// Encode bytes to padded standard Base64
pub(crate) fn encode_bytes(input: &[u8]) -> String {
    STANDARD.encode(input)
}

/// Decode padded standard Base64 to bytes
pub(crate) fn decode_bytes(input: &str, segment: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(input)
        .map_err(|e| Error::InvalidInput(format!("{segment} segment is not valid Base64: {e}")))
}
