//! Nonce generation
//!
//! Nonces only make repeated encodings of the same payload differ. They are
//! never checked for uniqueness on decode.

use crate::limits::NONCE_LENGTH;

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Produces the nonce injected into each encoded payload
pub trait NonceSource: Send + Sync {
    fn generate(&self) -> String;
}

/// Random `[A-Za-z0-9]` string of 24 characters from the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomNonce;

impl NonceSource for RandomNonce {
    fn generate(&self) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(NONCE_LENGTH)
            .map(char::from)
            .collect()
    }
}

/// Always yields the same nonce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedNonce(pub String);

impl FixedNonce {
    pub fn new(nonce: impl Into<String>) -> Self {
        Self(nonce.into())
    }
}

impl NonceSource for FixedNonce {
    fn generate(&self) -> String {
        self.0.clone()
    }
}
