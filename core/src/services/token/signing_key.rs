//! Signing key material derived once at startup.

use base64::engine::general_purpose;
use base64::Engine as _;
use jsonwebtoken::{DecodingKey, EncodingKey};

use crate::errors::ConfigError;

/// Immutable HMAC key material for token signing and verification
///
/// Derived exactly once from the configured raw secret: the raw bytes are
/// base64-encoded into the form the signing algorithm expects, then both
/// key halves are built from that encoded value. Never re-derived or
/// mutated after construction.
#[derive(Clone)]
pub struct SigningKey {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SigningKey {
    /// Derives the key pair from a configured raw secret
    ///
    /// # Arguments
    ///
    /// * `raw_secret` - The raw secret string from configuration
    ///
    /// # Returns
    ///
    /// * `Ok(SigningKey)` - The derived key material
    /// * `Err(ConfigError)` - The secret is empty or cannot be decoded;
    ///   fatal to startup, not retried
    pub fn derive(raw_secret: &str) -> Result<Self, ConfigError> {
        if raw_secret.trim().is_empty() {
            return Err(ConfigError::MissingSecret);
        }

        let encoded = general_purpose::STANDARD.encode(raw_secret.as_bytes());
        let encoding = EncodingKey::from_base64_secret(&encoded)
            .map_err(|source| ConfigError::InvalidSecret { source })?;
        let decoding = DecodingKey::from_base64_secret(&encoded)
            .map_err(|source| ConfigError::InvalidSecret { source })?;

        Ok(Self { encoding, decoding })
    }

    pub(crate) fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub(crate) fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}
