//! Process-wide signing key material.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use jsonwebtoken::{DecodingKey, EncodingKey};

use league_core::error::AppError;

/// Minimum decoded key length for HMAC-SHA256 (256 bits).
pub const MIN_KEY_BYTES: usize = 32;

/// Symmetric key used to sign and verify every token.
///
/// Decoded once at startup and shared read-only afterwards.
#[derive(Clone)]
pub struct SigningKey {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SigningKey {
    /// Decode a base64 (standard alphabet) secret.
    pub fn from_base64(encoded: &str) -> Result<Self, AppError> {
        let bytes = STANDARD
            .decode(encoded.trim())
            .map_err(|e| AppError::configuration(format!("Signing key is not valid base64: {e}")))?;
        Self::from_bytes(&bytes)
    }

    /// Use raw key bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AppError> {
        if bytes.len() < MIN_KEY_BYTES {
            return Err(AppError::configuration(format!(
                "Signing key must be at least {MIN_KEY_BYTES} bytes, got {}",
                bytes.len()
            )));
        }
        Ok(Self {
            encoding: EncodingKey::from_secret(bytes),
            decoding: DecodingKey::from_secret(bytes),
        })
    }

    pub(crate) fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub(crate) fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey").finish_non_exhaustive()
    }
}
