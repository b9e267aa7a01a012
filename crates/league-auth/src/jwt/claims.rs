//! Token payload.

use serde::{Deserialize, Serialize};

use league_entity::user::{User, UserRole};

/// Payload carried by every issued token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the identity's login.
    pub sub: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Numeric identity id, when known at issuance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Identity role, when known at issuance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

impl Claims {
    /// A token is live only while `now` is strictly before `exp`.
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }
}

/// Optional claims supplied by the caller of [`TokenCodec::issue`](super::TokenCodec::issue).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtraClaims {
    /// Numeric identity id.
    pub id: Option<i64>,
    /// Identity role.
    pub role: Option<UserRole>,
}

impl ExtraClaims {
    /// No extra claims; the token carries only subject and timestamps.
    pub fn none() -> Self {
        Self::default()
    }

    /// The id and role of a stored user.
    pub fn for_user(user: &User) -> Self {
        Self {
            id: Some(user.id),
            role: Some(user.role),
        }
    }
}
