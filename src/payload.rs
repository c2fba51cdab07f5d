//! Payload serialization
//!
//! A payload is a JSON object. It is serialized with `serde_json`, which
//! writes compact output, keeps numbers unquoted, and leaves non-ASCII text
//! and `/` unescaped. Keys are written in sorted order, so equal payloads
//! always serialize to identical bytes.

use crate::error::{Error, PayloadError, Result};

use serde::Serialize;
use serde_json::{Map, Value};

/// Field map carried inside a token
pub type Payload = Map<String, Value>;

/// Issuance time injected on encode (Unix seconds)
pub const TIMESTAMP_KEY: &str = "timestamp";

/// Per-token random string injected on encode
pub const NONCE_KEY: &str = "nonce";

/// Fields injected by the encoder and stripped by the decoder
pub const RESERVED_KEYS: [&str; 2] = [TIMESTAMP_KEY, NONCE_KEY];

/// Serialize a payload to canonical JSON bytes
pub fn serialize(payload: &Payload) -> Result<Vec<u8>> {
    serde_json::to_vec(payload).map_err(|e| Error::UnencodablePayload(e.to_string()))
}

/// Parse serialized payload bytes back into a field map
pub fn deserialize(bytes: &[u8]) -> Result<Payload> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| PayloadError::Malformed(e.to_string()))?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(PayloadError::NotAnObject.into()),
    }
}

/// Convert any serializable value into a payload
///
/// The value must serialize to a JSON object with string keys.
pub fn to_payload<T>(value: &T) -> Result<Payload>
where
    T: Serialize + ?Sized,
{
    match serde_json::to_value(value).map_err(|e| Error::UnencodablePayload(e.to_string()))? {
        Value::Object(map) => Ok(map),
        other => Err(Error::UnencodablePayload(format!(
            "expected a JSON object, got {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
