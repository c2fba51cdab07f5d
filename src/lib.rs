//! # ajwt - Compact Signed Tokens
//!
//! > Tamper-evident, time-bounded tokens for systems that issue and verify
//! > with the same shared secret.
//!
//! **ajwt** turns an arbitrary JSON object into a two-segment token string
//! and back. It is a lightweight alternative to JWT for services that own
//! both ends of the exchange: there is no header, no algorithm negotiation
//! and no key discovery. Every token is signed with HMAC-SHA512.
//!
//! ## Token Format
//!
//! ```text
//! base64(serialized_payload) "." base64(signature)
//! ```
//!
//! - `serialized_payload` is the caller's object as compact JSON, with keys in
//!   sorted order and two injected fields: `timestamp` (Unix seconds) and
//!   `nonce` (24 random alphanumeric characters).
//! - `signature` is the raw 64-byte HMAC-SHA512 of those bytes.
//! - Both segments use the standard Base64 alphabet with padding.
//!
//! ## Quick Start
//!
//! ```
//! use ajwt::{Decoder, Encoder, Payload, Validation};
//! use serde_json::json;
//!
//! let mut payload = Payload::new();
//! payload.insert("user".into(), json!("alice"));
//!
//! let token = Encoder::new("shared-secret").encode(&payload)?;
//!
//! let decoded = Decoder::new("shared-secret")
//!     .validate(Validation::new().require("user").validity(3600))
//!     .decode(&token)?;
//!
//! assert_eq!(decoded, payload);
//! # Ok::<(), ajwt::Error>(())
//! ```
//!
//! ## Decoding Flow
//!
//! ```text
//! token string
//!     │ split on '.', Base64-decode      → InvalidInput
//!     ▼
//! raw payload bytes + signature
//!     │ HMAC-SHA512 compare (raw bytes)  → InvalidSignature
//!     ▼
//! verified bytes
//!     │ JSON parse                       → InvalidPayload
//!     ▼
//! payload object
//!     │ required keys, timestamp window  → InvalidPayload
//!     ▼
//! payload without timestamp/nonce
//! ```
//!
//! The signature is checked before the payload is parsed, so the JSON parser
//! only ever sees bytes produced by a holder of the key.
//!
//! ## Temporal Validation
//!
//! With a validity of `D` seconds, a token issued at `T` is accepted while
//! `now <= T + D`. A validity of zero disables expiry. Tokens whose
//! timestamp is ahead of the verifier's clock are always rejected.
//!
//! Time and randomness are read through the [`Clock`] and [`NonceSource`]
//! traits so both can be pinned in tests.
//!
//! ## Non-features
//!
//! Key management, asymmetric signatures and replay protection are out of
//! scope. The nonce is carried in every token but never checked against a
//! store.

// Core modules
mod error;
pub mod limits;
pub(crate) mod utils;

// Building blocks
pub mod keys;
pub mod nonce;
pub mod payload;
pub mod signer;
pub mod time;
pub(crate) mod token;

// Encode / decode (main public API)
pub mod decoder;
pub mod encoder;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use decoder::{decode, Decoder, Validation};
pub use encoder::{encode, encode_claims, encode_with, Encoder};

pub use error::{Error, ErrorKind, PayloadError, Result};
pub use keys::SecretKey;
pub use nonce::{FixedNonce, NonceSource, RandomNonce};
pub use payload::Payload;
pub use signer::Signature;
pub use time::{Clock, FixedClock, SystemClock};
