use crate::error::{Error, Result};
use crate::keys::SecretKey;
use crate::limits::MAX_TOKEN_LENGTH;
use crate::nonce::{NonceSource, RandomNonce};
use crate::payload::{self, Payload, NONCE_KEY, TIMESTAMP_KEY};
use crate::signer::sign;
use crate::time::{Clock, SystemClock};
use crate::token::frame;

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Token encoder
///
/// The encoder is configured once and can be reused for any number of
/// payloads. Unless pinned, the timestamp and nonce are resolved anew on
/// every call to [`Encoder::encode`].
#[derive(Clone)]
pub struct Encoder {
    key: SecretKey,
    timestamp: Option<i64>,
    nonce: Option<String>,
    clock: Arc<dyn Clock>,
    nonce_source: Arc<dyn NonceSource>,
}

impl Encoder {
    /// Create an encoder signing with `key`, using the system clock and random nonces
    pub fn new(key: impl Into<SecretKey>) -> Self {
        Self {
            key: key.into(),
            timestamp: None,
            nonce: None,
            clock: Arc::new(SystemClock),
            nonce_source: Arc::new(RandomNonce),
        }
    }

    /// Pin the issuance timestamp (Unix seconds)
    pub fn timestamp(&mut self, timestamp: i64) -> &mut Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Pin the nonce
    pub fn nonce(&mut self, nonce: impl Into<String>) -> &mut Self {
        self.nonce = Some(nonce.into());
        self
    }

    /// Configure the clock used when no timestamp is pinned
    pub fn clock(&mut self, clock: impl Clock + 'static) -> &mut Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Configure the nonce generator used when no nonce is pinned
    pub fn nonce_source(&mut self, source: impl NonceSource + 'static) -> &mut Self {
        self.nonce_source = Arc::new(source);
        self
    }

    /// Snapshot the configured encoder
    pub fn build(&mut self) -> Self {
        self.clone()
    }
}

impl Encoder {
    /// Encode a payload into a token string
    ///
    /// The caller's payload is left untouched; `timestamp` and `nonce` are
    /// injected into a copy, replacing any caller fields of the same name.
    pub fn encode(&self, payload: &Payload) -> Result<String> {
        let timestamp = self.timestamp.unwrap_or_else(|| self.clock.now());
        let nonce = self
            .nonce
            .clone()
            .unwrap_or_else(|| self.nonce_source.generate());

        let mut augmented = payload.clone();
        augmented.insert(TIMESTAMP_KEY.into(), Value::from(timestamp));
        augmented.insert(NONCE_KEY.into(), Value::String(nonce));

        let serialized = payload::serialize(&augmented)?;
        let signature = sign(&serialized, &self.key);
        let token = frame(&serialized, &signature);

        // Never issue a token the decoder would refuse
        if token.len() > MAX_TOKEN_LENGTH {
            return Err(Error::UnencodablePayload(format!(
                "token would be {} bytes (maximum: {MAX_TOKEN_LENGTH} bytes)",
                token.len()
            )));
        }

        tracing::trace!(timestamp, fields = payload.len(), "encoded token");

        Ok(token)
    }

    /// Encode any value that serializes to a JSON object
    pub fn encode_claims<T>(&self, claims: &T) -> Result<String>
    where
        T: Serialize + ?Sized,
    {
        self.encode(&payload::to_payload(claims)?)
    }
}

/// Encode `payload` with the current time and a random nonce
pub fn encode(payload: &Payload, key: impl Into<SecretKey>) -> Result<String> {
    Encoder::new(key).encode(payload)
}

/// Encode `payload`, optionally pinning the timestamp and nonce
pub fn encode_with(
    payload: &Payload,
    key: impl Into<SecretKey>,
    timestamp: Option<i64>,
    nonce: Option<&str>,
) -> Result<String> {
    let mut encoder = Encoder::new(key);
    if let Some(timestamp) = timestamp {
        encoder.timestamp(timestamp);
    }
    if let Some(nonce) = nonce {
        encoder.nonce(nonce);
    }
    encoder.encode(payload)
}

/// Encode any value that serializes to a JSON object
pub fn encode_claims<T>(claims: &T, key: impl Into<SecretKey>) -> Result<String>
where
    T: Serialize + ?Sized,
{
    Encoder::new(key).encode_claims(claims)
}
