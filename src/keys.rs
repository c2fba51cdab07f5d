/// Shared secret used to sign and verify tokens
///
/// The same key must be used on both ends. Any byte length is accepted;
/// HMAC hashes keys longer than the SHA-512 block size.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey {
    secret: Vec<u8>,
}

impl SecretKey {
    /// Create a new secret key
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Get the secret bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.secret
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretKey")
            .field("len", &self.secret.len())
            .finish_non_exhaustive()
    }
}

impl From<Vec<u8>> for SecretKey {
    fn from(secret: Vec<u8>) -> Self {
        Self::new(secret)
    }
}

impl From<&[u8]> for SecretKey {
    fn from(secret: &[u8]) -> Self {
        Self::new(secret.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for SecretKey {
    fn from(secret: &[u8; N]) -> Self {
        Self::new(secret.to_vec())
    }
}

impl From<String> for SecretKey {
    fn from(secret: String) -> Self {
        Self::new(secret.into_bytes())
    }
}

impl From<&str> for SecretKey {
    fn from(secret: &str) -> Self {
        Self::new(secret.as_bytes().to_vec())
    }
}

impl AsRef<[u8]> for SecretKey {
    fn as_ref(&self) -> &[u8] {
        &self.secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions_agree() {
        let from_str = SecretKey::from("secret");
        let from_array = SecretKey::from(b"secret");
        let from_vec = SecretKey::from(b"secret".to_vec());
        let from_string = SecretKey::from(String::from("secret"));

        assert_eq!(from_str, from_array);
        assert_eq!(from_array, from_vec);
        assert_eq!(from_vec, from_string);
        assert_eq!(from_str.as_bytes(), b"secret");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let key = SecretKey::from("super-secret-value");
        let debug = format!("{key:?}");
        assert!(!debug.contains("super-secret-value"));
        assert!(debug.contains("len: 18"));
    }
}
