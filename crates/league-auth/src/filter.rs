//! Per-request bearer token authentication.
//!
//! The filter never rejects a request. It only decides whether a principal
//! can be attached; enforcement belongs to the access policy.

use std::sync::Arc;

use tracing::debug;

use crate::error::AuthError;
use crate::jwt::TokenCodec;
use crate::principal::Principal;
use crate::store::CredentialStore;

/// Scheme prefix expected in the `Authorization` header.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Terminal state of one pass of the filter.
#[derive(Debug, Clone)]
pub enum FilterOutcome {
    /// A valid token for a registered identity was presented.
    Authenticated(Principal),
    /// A bearer token was presented but not accepted. The request continues without identity.
    Unauthenticated(AuthError),
    /// No bearer token, or a principal was already attached. Nothing was changed.
    Passthrough,
}

impl FilterOutcome {
    /// The newly established principal, if any.
    pub fn into_principal(self) -> Option<Principal> {
        match self {
            Self::Authenticated(principal) => Some(principal),
            _ => None,
        }
    }
}

/// Resolves the caller's identity from the `Authorization` header.
#[derive(Debug, Clone)]
pub struct AuthenticationFilter {
    codec: Arc<TokenCodec>,
    store: Arc<dyn CredentialStore>,
}

impl AuthenticationFilter {
    /// Creates a new filter.
    pub fn new(codec: Arc<TokenCodec>, store: Arc<dyn CredentialStore>) -> Self {
        Self { codec, store }
    }

    /// Extracts the token from a `Bearer` header value.
    pub fn bearer_token(header: &str) -> Option<&str> {
        header.strip_prefix(BEARER_PREFIX)
    }

    /// Runs the filter for one request.
    ///
    /// `current` is the principal already attached to the request, if any;
    /// it is never replaced.
    pub async fn authenticate(
        &self,
        authorization: Option<&str>,
        current: Option<&Principal>,
    ) -> FilterOutcome {
        let Some(token) = authorization.and_then(Self::bearer_token) else {
            return FilterOutcome::Passthrough;
        };

        if current.is_some() {
            debug!("Principal already present, skipping token");
            return FilterOutcome::Passthrough;
        }

        let subject = match self.codec.subject_of(token) {
            Ok(subject) => subject,
            Err(err) => return self.reject(err),
        };

        let user = match self.store.find_by_login(&subject).await {
            Ok(Some(user)) => user,
            Ok(None) => return self.reject(AuthError::IdentityNotFound),
            Err(err) => return self.reject(AuthError::Internal(err)),
        };

        if !self.codec.is_valid(token, &user.username) {
            return self.reject(AuthError::TokenExpired);
        }

        FilterOutcome::Authenticated(Principal::from_user(&user))
    }

    fn reject(&self, err: AuthError) -> FilterOutcome {
        debug!(reason = %err, "Bearer token not accepted");
        FilterOutcome::Unauthenticated(err)
    }
}
