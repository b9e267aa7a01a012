//! Bearer token authentication middleware.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use league_auth::{FilterOutcome, Principal};

use crate::state::AppState;

/// Runs the authentication filter and attaches the resulting [`Principal`]
/// to the request extensions.
///
/// Never rejects; requests without a usable token continue anonymously and
/// the access policy decides what they may reach.
pub async fn authenticate(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let authorization = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let current = request.extensions().get::<Principal>().cloned();

    let outcome = state
        .auth_filter
        .authenticate(authorization.as_deref(), current.as_ref())
        .await;

    if let FilterOutcome::Authenticated(principal) = outcome {
        request.extensions_mut().insert(principal);
    }

    next.run(request).await
}
