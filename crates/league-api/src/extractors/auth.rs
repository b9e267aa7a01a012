//! `AuthUser` extractor: yields the principal attached by the authentication middleware.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use league_auth::Principal;
use league_core::error::AppError;
use league_entity::user::UserRole;

/// Authenticated caller available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Principal);

impl AuthUser {
    /// Returns the inner [`Principal`].
    pub fn principal(&self) -> &Principal {
        &self.0
    }

    /// Fails with 403 unless the caller holds `role`.
    pub fn require_role(&self, role: UserRole) -> Result<(), AppError> {
        if self.0.has_role(role) {
            Ok(())
        } else {
            Err(AppError::authorization("Access denied"))
        }
    }
}

impl std::ops::Deref for AuthUser {
    type Target = Principal;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| AppError::authentication("Authentication required"))
    }
}
