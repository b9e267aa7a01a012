//! Token creation.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, Header, encode};

use league_core::error::AppError;

use super::claims::{Claims, ExtraClaims};
use super::key::SigningKey;
use crate::error::AuthError;

/// Creates HS256-signed tokens.
#[derive(Debug, Clone)]
pub struct JwtEncoder {
    key: Arc<SigningKey>,
    header: Header,
}

impl JwtEncoder {
    /// Creates a new encoder sharing the given key.
    pub fn new(key: Arc<SigningKey>) -> Self {
        Self {
            key,
            header: Header::new(Algorithm::HS256),
        }
    }

    /// Builds and signs the payload `{sub, iat = now, exp = now + validity, id?, role?}`.
    pub fn encode(
        &self,
        subject: &str,
        extra: ExtraClaims,
        validity: Duration,
    ) -> Result<(String, Claims), AuthError> {
        let now = Utc::now();
        let expires = now
            .checked_add_signed(validity)
            .ok_or_else(|| AppError::internal("Token validity overflows the clock"))?;
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expires.timestamp(),
            id: extra.id,
            role: extra.role,
        };

        let token = encode(&self.header, &claims, self.key.encoding())
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))?;

        Ok((token, claims))
    }
}
