//! Authentication failure taxonomy.

use thiserror::Error;

use league_core::error::{AppError, ErrorKind};

/// Message shown for every failed sign-in, whatever the cause.
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Message shown for every rejected token, whatever the cause.
pub const INVALID_TOKEN: &str = "Invalid or expired token";

/// Errors raised by the token codec and the authenticator.
///
/// The token variants and `IdentityNotFound` are internal detail; they all
/// collapse into the same [`AppError`] at the HTTP boundary.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Unknown login or wrong password.
    #[error("Invalid username or password")]
    InvalidCredentials,
    /// Sign-up with a login that is already registered.
    #[error("User with username '{0}' already exists")]
    IdentityAlreadyExists(String),
    /// The token is not a structurally valid signed token.
    #[error("Token is malformed")]
    TokenMalformed,
    /// The token signature does not match its contents.
    #[error("Token signature is invalid")]
    TokenSignatureInvalid,
    /// The token's expiry has passed.
    #[error("Token has expired")]
    TokenExpired,
    /// The token subject has no registered identity.
    #[error("Identity not found")]
    IdentityNotFound,
    /// Store or hashing failure unrelated to the caller's input.
    #[error(transparent)]
    Internal(#[from] AppError),
}

impl AuthError {
    /// Returns `true` for the token decoding variants.
    pub fn is_token_error(&self) -> bool {
        matches!(
            self,
            Self::TokenMalformed | Self::TokenSignatureInvalid | Self::TokenExpired
        )
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => AppError::authentication(INVALID_CREDENTIALS),
            AuthError::IdentityAlreadyExists(_) => AppError::conflict(err.to_string()),
            AuthError::TokenMalformed
            | AuthError::TokenSignatureInvalid
            | AuthError::TokenExpired
            | AuthError::IdentityNotFound => AppError::new(ErrorKind::Authentication, INVALID_TOKEN),
            AuthError::Internal(inner) => inner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_failures_are_indistinguishable_at_boundary() {
        let errors = [
            AuthError::TokenMalformed,
            AuthError::TokenSignatureInvalid,
            AuthError::TokenExpired,
            AuthError::IdentityNotFound,
        ];
        for err in errors {
            let app: AppError = err.into();
            assert_eq!(app.kind, ErrorKind::Authentication);
            assert_eq!(app.message, INVALID_TOKEN);
        }
    }

    #[test]
    fn test_duplicate_identity_maps_to_conflict() {
        let app: AppError = AuthError::IdentityAlreadyExists("alice".to_string()).into();
        assert_eq!(app.kind, ErrorKind::Conflict);
        assert_eq!(app.message, "User with username 'alice' already exists");
    }

    #[test]
    fn test_internal_passes_through() {
        let app: AppError = AuthError::Internal(AppError::database("down")).into();
        assert_eq!(app.kind, ErrorKind::Database);
    }
}
