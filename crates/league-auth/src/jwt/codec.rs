//! The token codec used by the authenticator and the request filter.

use std::sync::Arc;

use chrono::{Duration, Utc};

use league_core::config::AuthConfig;
use league_core::error::AppError;

use super::claims::{Claims, ExtraClaims};
use super::decoder::JwtDecoder;
use super::encoder::JwtEncoder;
use super::key::SigningKey;
use crate::error::AuthError;

/// Issues and checks bearer tokens signed with a single process-wide key.
#[derive(Debug, Clone)]
pub struct TokenCodec {
    encoder: JwtEncoder,
    decoder: JwtDecoder,
    validity: Duration,
}

impl TokenCodec {
    /// Builds a codec from configuration, decoding the signing key once.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let key = SigningKey::from_base64(&config.signing_key)?;
        let validity = i64::try_from(config.token_validity_seconds)
            .ok()
            .and_then(Duration::try_seconds)
            .ok_or_else(|| AppError::configuration("auth.token_validity_seconds is out of range"))?;
        Ok(Self::with_key(key, validity))
    }

    /// Builds a codec around an already decoded key.
    pub fn with_key(key: SigningKey, validity: Duration) -> Self {
        let key = Arc::new(key);
        Self {
            encoder: JwtEncoder::new(Arc::clone(&key)),
            decoder: JwtDecoder::new(key),
            validity,
        }
    }

    /// The configured lifetime for tokens issued at sign-in and sign-up.
    pub fn validity(&self) -> Duration {
        self.validity
    }

    /// Issues a token for `subject` that expires after `validity`.
    pub fn issue(
        &self,
        subject: &str,
        claims: ExtraClaims,
        validity: Duration,
    ) -> Result<String, AuthError> {
        self.encoder
            .encode(subject, claims, validity)
            .map(|(token, _)| token)
    }

    /// Verifies the token and returns its full payload.
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        self.decoder.decode(token)
    }

    /// Verifies the token and returns its subject.
    pub fn subject_of(&self, token: &str) -> Result<String, AuthError> {
        self.decoder.decode(token).map(|claims| claims.sub)
    }

    /// `true` iff the signature verifies, the subject equals `expected_subject`
    /// exactly, and the token has not expired. Never fails.
    pub fn is_valid(&self, token: &str, expected_subject: &str) -> bool {
        match self.decoder.decode(token) {
            Ok(claims) => {
                claims.sub == expected_subject && !claims.is_expired_at(Utc::now().timestamp())
            }
            Err(_) => false,
        }
    }

    /// `true` if the token has expired or cannot be decoded at all.
    pub fn is_expired(&self, token: &str) -> bool {
        match self.decoder.decode_ignoring_expiry(token) {
            Ok(claims) => claims.is_expired_at(Utc::now().timestamp()),
            Err(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use league_entity::user::UserRole;

    const KEY: &str = "A7RjhH3kKJLusngyTPWbIZcTvWZTeJdTuMyY79pQccY=";
    const OTHER_KEY: &str = "Zm9vYmFyYmF6cXV4Zm9vYmFyYmF6cXV4Zm9vYmFyYmE=";

    fn codec() -> TokenCodec {
        codec_with(KEY)
    }

    fn codec_with(key: &str) -> TokenCodec {
        TokenCodec::with_key(SigningKey::from_base64(key).unwrap(), Duration::seconds(3600))
    }

    fn hour() -> Duration {
        Duration::seconds(3600)
    }

    /// Flip one character inside the given dot-separated segment.
    fn tamper(token: &str, segment: usize) -> String {
        let mut parts: Vec<String> = token.split('.').map(String::from).collect();
        let target = &mut parts[segment];
        let mid = target.len() / 2;
        let original = target.as_bytes()[mid] as char;
        let replacement = if original == 'A' { 'B' } else { 'A' };
        target.replace_range(mid..=mid, &replacement.to_string());
        parts.join(".")
    }

    #[test]
    fn test_round_trip_subject() {
        let codec = codec();
        for login in ["alice", "Bob", "user.with+symbols@example.org", "名前"] {
            let token = codec.issue(login, ExtraClaims::none(), hour()).unwrap();
            assert_eq!(codec.subject_of(&token).unwrap(), login);
        }
    }

    #[test]
    fn test_token_has_three_segments_and_extra_claims() {
        let codec = codec();
        let extra = ExtraClaims {
            id: Some(42),
            role: Some(UserRole::Admin),
        };
        let token = codec.issue("alice", extra, hour()).unwrap();
        assert_eq!(token.split('.').count(), 3);

        let claims = codec.decode(&token).unwrap();
        assert_eq!(claims.id, Some(42));
        assert_eq!(claims.role, Some(UserRole::Admin));
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_fresh_token_is_valid_for_its_subject_only() {
        let codec = codec();
        let token = codec.issue("alice", ExtraClaims::none(), hour()).unwrap();
        assert!(codec.is_valid(&token, "alice"));
        assert!(!codec.is_valid(&token, "Alice"));
        assert!(!codec.is_valid(&token, "bob"));
        assert!(!codec.is_expired(&token));
    }

    #[test]
    fn test_expired_token() {
        let codec = codec();
        let token = codec
            .issue("alice", ExtraClaims::none(), Duration::seconds(-10))
            .unwrap();
        assert!(codec.is_expired(&token));
        assert!(!codec.is_valid(&token, "alice"));
        assert!(matches!(codec.subject_of(&token), Err(AuthError::TokenExpired)));
    }

    #[test]
    fn test_zero_validity_is_dead_on_arrival() {
        let codec = codec();
        let token = codec
            .issue("alice", ExtraClaims::none(), Duration::zero())
            .unwrap();
        assert!(!codec.is_valid(&token, "alice"));
        assert!(codec.is_expired(&token));
    }

    #[test]
    fn test_tampered_payload_is_rejected() {
        let codec = codec();
        let token = codec.issue("alice", ExtraClaims::none(), hour()).unwrap();
        let forged = tamper(&token, 1);
        assert!(!codec.is_valid(&forged, "alice"));
        assert!(codec.subject_of(&forged).is_err());
        assert!(codec.is_expired(&forged));
    }

    #[test]
    fn test_tampered_signature_is_rejected() {
        let codec = codec();
        let token = codec.issue("alice", ExtraClaims::none(), hour()).unwrap();
        let forged = tamper(&token, 2);
        assert!(!codec.is_valid(&forged, "alice"));
        assert!(codec.subject_of(&forged).is_err());
    }

    #[test]
    fn test_foreign_key_signature_is_invalid() {
        let token = codec_with(OTHER_KEY)
            .issue("alice", ExtraClaims::none(), hour())
            .unwrap();
        let codec = codec();
        assert!(matches!(
            codec.subject_of(&token),
            Err(AuthError::TokenSignatureInvalid)
        ));
        assert!(!codec.is_valid(&token, "alice"));
        assert!(codec.is_expired(&token));
    }

    #[test]
    fn test_garbage_is_malformed_and_expired() {
        let codec = codec();
        for junk in ["", "abc", "a.b.c", "not-a-token-at-all"] {
            assert!(matches!(codec.subject_of(junk), Err(AuthError::TokenMalformed)));
            assert!(!codec.is_valid(junk, "alice"));
            assert!(codec.is_expired(junk));
        }
    }

    #[test]
    fn test_oversized_validity_is_an_error() {
        let codec = codec();
        let result = codec.issue("alice", ExtraClaims::none(), Duration::seconds(9_000_000_000_000));
        assert!(matches!(result, Err(AuthError::Internal(_))));
    }

    #[test]
    fn test_new_rejects_out_of_range_validity() {
        let config = AuthConfig {
            signing_key: KEY.to_string(),
            token_validity_seconds: 10_000_000_000_000_000,
        };
        let err = TokenCodec::new(&config).unwrap_err();
        assert_eq!(err.kind, league_core::error::ErrorKind::Configuration);
    }

    #[test]
    fn test_new_reads_config() {
        let config = AuthConfig {
            signing_key: KEY.to_string(),
            token_validity_seconds: 120,
        };
        let codec = TokenCodec::new(&config).unwrap();
        assert_eq!(codec.validity(), Duration::seconds(120));
    }
}
