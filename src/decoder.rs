use crate::error::{Error, PayloadError, Result};
use crate::keys::SecretKey;
use crate::payload::{self, Payload, NONCE_KEY, RESERVED_KEYS, TIMESTAMP_KEY};
use crate::signer::verify;
use crate::time::{Clock, SystemClock};
use crate::token::RawToken;

use serde_json::Value;
use std::sync::Arc;

/// Configuration for payload validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    required_keys: Vec<String>,
    validity_seconds: u64,
}

impl Validation {
    /// Create a new validation config with defaults
    ///
    /// Only the reserved `timestamp` and `nonce` fields are required and
    /// tokens never expire. Tokens issued in the future are always rejected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a field to be present in the payload
    pub fn require(mut self, key: impl Into<String>) -> Self {
        self.required_keys.push(key.into());
        self
    }

    /// Require every field in `keys` to be present in the payload
    pub fn require_all<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Set the maximum token age in seconds
    ///
    /// Zero disables expiry.
    pub fn validity(mut self, seconds: u64) -> Self {
        self.validity_seconds = seconds;
        self
    }

    /// Additionally required fields, excluding the reserved ones
    pub fn required_keys(&self) -> &[String] {
        &self.required_keys
    }

    /// Maximum token age in seconds, zero when expiry is disabled
    pub fn validity_seconds(&self) -> u64 {
        self.validity_seconds
    }

    /// Names from the required set that `payload` lacks, in configuration order
    fn missing_keys(&self, payload: &Payload) -> Vec<String> {
        let mut missing: Vec<String> = Vec::new();
        let required = self
            .required_keys
            .iter()
            .map(String::as_str)
            .chain(RESERVED_KEYS);

        for key in required {
            if !payload.contains_key(key) && !missing.iter().any(|m| m == key) {
                missing.push(key.to_string());
            }
        }
        missing
    }

    /// Check the issuance timestamp against `now`
    fn validate_timestamp(&self, timestamp: i64, now: i64) -> Result<()> {
        if self.validity_seconds > 0 {
            let validity = i64::try_from(self.validity_seconds).unwrap_or(i64::MAX);
            if now > timestamp.saturating_add(validity) {
                return Err(PayloadError::Expired {
                    timestamp,
                    validity: self.validity_seconds,
                    now,
                }
                .into());
            }
        }

        if timestamp > now {
            return Err(PayloadError::IssuedInFuture { timestamp, now }.into());
        }

        Ok(())
    }
}

/// Token decoder
///
/// The decoder is configured once and can be reused for multiple tokens.
#[derive(Clone)]
pub struct Decoder {
    key: SecretKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl Decoder {
    /// Create a decoder verifying with `key`, with default validation and the system clock
    pub fn new(key: impl Into<SecretKey>) -> Self {
        Self {
            key: key.into(),
            validation: Validation::default(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Configure payload validation
    pub fn validate(&mut self, validation: Validation) -> &mut Self {
        self.validation = validation;
        self
    }

    /// Configure the clock used for temporal validation
    pub fn clock(&mut self, clock: impl Clock + 'static) -> &mut Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Snapshot the configured decoder
    pub fn build(&mut self) -> Self {
        self.clone()
    }
}

impl Decoder {
    /// Decode and validate a token string
    ///
    /// Returns the payload with the reserved `timestamp` and `nonce` fields
    /// removed. Nothing is returned unless every check passes.
    pub fn decode(&self, token: &str) -> Result<Payload> {
        let result = self.decode_inner(token);
        match &result {
            Ok(payload) => tracing::trace!(fields = payload.len(), "decoded token"),
            Err(e) => tracing::debug!(kind = ?e.kind(), error = %e, "token rejected"),
        }
        result
    }

    fn decode_inner(&self, token: &str) -> Result<Payload> {
        // 1-2. Split into two members and decode them
        let raw = RawToken::parse(token)?;

        // 3. Verify the signature over the raw bytes before parsing anything
        if !verify(&raw.payload, &self.key, &raw.signature) {
            return Err(Error::InvalidSignature);
        }

        // 4. Parse payload
        let mut payload = payload::deserialize(&raw.payload)?;

        // 5. Check required keys
        let missing = self.validation.missing_keys(&payload);
        if !missing.is_empty() {
            return Err(PayloadError::MissingKeys(missing).into());
        }

        // 6. Check time validity
        let timestamp = timestamp_value(&payload[TIMESTAMP_KEY])?;
        self.validation
            .validate_timestamp(timestamp, self.clock.now())?;

        payload.remove(TIMESTAMP_KEY);
        payload.remove(NONCE_KEY);
        Ok(payload)
    }
}

/// Decode `token` with the system clock
///
/// `required_keys` are checked in addition to `timestamp` and `nonce`.
/// A `validity_seconds` of zero disables expiry.
pub fn decode<I, S>(
    token: &str,
    key: impl Into<SecretKey>,
    required_keys: I,
    validity_seconds: u64,
) -> Result<Payload>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Decoder::new(key)
        .validate(
            Validation::new()
                .require_all(required_keys)
                .validity(validity_seconds),
        )
        .decode(token)
}

/// Read the timestamp field as whole seconds
///
/// Floats are truncated toward zero and strings must hold an integer literal.
fn timestamp_value(value: &Value) -> Result<i64> {
    let not_integer = || PayloadError::TimestampNotInteger(value.to_string());

    let timestamp = match value {
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => Some(i),
            // `as` saturates at the i64 bounds
            (None, Some(f)) if f.is_finite() => Some(f.trunc() as i64),
            _ => None,
        },
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    timestamp.ok_or_else(|| not_integer().into())
}
