//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Token signing configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Base64-encoded HMAC-SHA256 signing key. Must decode to at least 32 bytes.
    pub signing_key: String,
    /// Lifetime of issued tokens in seconds.
    #[serde(default = "default_token_validity")]
    pub token_validity_seconds: u64,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("signing_key", &"<redacted>")
            .field("token_validity_seconds", &self.token_validity_seconds)
            .finish()
    }
}

fn default_token_validity() -> u64 {
    3600
}
