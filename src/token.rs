use crate::error::{Error, Result};
use crate::limits::MAX_TOKEN_LENGTH;
use crate::signer::Signature;
use crate::utils::base64;

/// Separator between the payload and signature segments
pub(crate) const SEGMENT_SEPARATOR: char = '.';

/// Join serialized payload bytes and their signature into a token string
///
/// The result has the form `base64(serialized) "." base64(signature)`.
pub(crate) fn frame(serialized: &[u8], signature: &Signature) -> String {
    format!(
        "{}{SEGMENT_SEPARATOR}{}",
        base64::encode_bytes(serialized),
        base64::encode_bytes(signature.as_bytes())
    )
}

/// A token split into its decoded segments
///
/// Nothing in here is trusted yet: the signature still has to be checked
/// against the payload bytes before they are parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawToken {
    pub(crate) payload: Vec<u8>,
    pub(crate) signature: Vec<u8>,
}

impl RawToken {
    /// Split a token on `.` and Base64-decode both segments
    pub(crate) fn parse(token: &str) -> Result<Self> {
        if token.len() > MAX_TOKEN_LENGTH {
            return Err(Error::TokenTooLarge {
                size: token.len(),
                max: MAX_TOKEN_LENGTH,
            });
        }

        let segments: Vec<&str> = token.split(SEGMENT_SEPARATOR).collect();
        if segments.len() != 2 {
            return Err(Error::InvalidInput(format!(
                "invalid member count {}",
                segments.len()
            )));
        }

        let (payload_b64, signature_b64) = (segments[0], segments[1]);
        if payload_b64.is_empty() || signature_b64.is_empty() {
            return Err(Error::InvalidInput("empty member".into()));
        }

        Ok(Self {
            payload: base64::decode_bytes(payload_b64, "payload")?,
            signature: base64::decode_bytes(signature_b64, "signature")?,
        })
    }
}
