//! Size limit constants for input validation

/// Maximum length for a token string (64KB)
///
/// Enforced on both sides: the encoder refuses to issue a longer token and
/// the decoder rejects one before splitting it.
pub const MAX_TOKEN_LENGTH: usize = 64 * 1024;

/// Length of the random nonce injected on encode
pub(crate) const NONCE_LENGTH: usize = 24;

/// Length of an HMAC-SHA512 digest in bytes
pub(crate) const SIGNATURE_LENGTH: usize = 64;
