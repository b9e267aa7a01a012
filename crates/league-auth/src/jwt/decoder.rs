//! Token verification.

use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, Validation, decode};

use super::claims::Claims;
use super::key::SigningKey;
use crate::error::AuthError;

/// Verifies token signatures and expiry.
#[derive(Clone)]
pub struct JwtDecoder {
    key: Arc<SigningKey>,
    /// Signature + expiry, no clock-skew allowance.
    strict: Validation,
    /// Signature only; used to read `exp` of tokens that may already be dead.
    signature_only: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.strict)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder sharing the given key.
    pub fn new(key: Arc<SigningKey>) -> Self {
        let mut strict = Validation::new(Algorithm::HS256);
        strict.validate_exp = true;
        strict.leeway = 0;

        let mut signature_only = Validation::new(Algorithm::HS256);
        signature_only.validate_exp = false;
        signature_only.leeway = 0;

        Self {
            key,
            strict,
            signature_only,
        }
    }

    /// Verifies signature and expiry and returns the payload.
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        let claims = self.decode_with(token, &self.strict)?;
        // The library accepts `exp == now`; a token is dead from its expiry second onwards.
        if claims.is_expired_at(Utc::now().timestamp()) {
            return Err(AuthError::TokenExpired);
        }
        Ok(claims)
    }

    /// Verifies the signature only and returns the payload, expired or not.
    pub fn decode_ignoring_expiry(&self, token: &str) -> Result<Claims, AuthError> {
        self.decode_with(token, &self.signature_only)
    }

    fn decode_with(&self, token: &str, validation: &Validation) -> Result<Claims, AuthError> {
        decode::<Claims>(token, self.key.decoding(), validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                JwtErrorKind::ExpiredSignature => AuthError::TokenExpired,
                JwtErrorKind::InvalidSignature => AuthError::TokenSignatureInvalid,
                _ => AuthError::TokenMalformed,
            })
    }
}
