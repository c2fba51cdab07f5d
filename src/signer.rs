//! HMAC-SHA512 signing and verification

use crate::keys::SecretKey;
use crate::limits::SIGNATURE_LENGTH;

use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

/// Raw HMAC-SHA512 digest over serialized payload bytes
#[derive(Clone, PartialEq, Eq)]
pub struct Signature([u8; SIGNATURE_LENGTH]);

impl Signature {
    /// Get the digest bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Lowercase hex representation (128 characters)
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Debug for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Signature({})", self.to_hex())
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Compute HMAC-SHA512(key, bytes)
pub fn sign(bytes: &[u8], key: &SecretKey) -> Signature {
    // Keys longer than the block size are hashed and shorter ones padded,
    // so `new_from_slice` never returns `InvalidLength` for HMAC.
    let mut mac =
        HmacSha512::new_from_slice(key.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(bytes);

    let mut digest = [0u8; SIGNATURE_LENGTH];
    digest.copy_from_slice(&mac.finalize().into_bytes());
    Signature(digest)
}

/// Verify `signature` against the recomputed HMAC with constant-time comparison
pub fn verify(bytes: &[u8], key: &SecretKey, signature: &[u8]) -> bool {
    let expected = sign(bytes, key);

    if signature.len() != expected.0.len() {
        return false;
    }

    constant_time_eq(signature, &expected.0)
}
