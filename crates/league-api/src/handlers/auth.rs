//! Auth handlers: sign-up, sign-in, me.

use axum::Json;
use axum::extract::State;
use league_core::error::AppError;

use crate::dto::request::CredentialsRequest;
use crate::dto::response::{ApiResponse, MeResponse, TokenResponse};
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/auth/sign-up
pub async fn sign_up(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CredentialsRequest>,
) -> Result<Json<ApiResponse<TokenResponse>>, AppError> {
    let token = state
        .authenticator
        .sign_up(&req.username, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(TokenResponse { token })))
}

/// POST /api/auth/sign-in
pub async fn sign_in(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CredentialsRequest>,
) -> Result<Json<ApiResponse<TokenResponse>>, AppError> {
    let token = state
        .authenticator
        .sign_in(&req.username, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(TokenResponse { token })))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<MeResponse>>, AppError> {
    let user = state
        .credential_store
        .find_by_login(&auth.username)
        .await?
        .ok_or_else(|| AppError::authentication("Authentication required"))?;

    Ok(Json(ApiResponse::ok(MeResponse {
        id: user.id,
        username: user.username,
        first_name: user.first_name,
        last_name: user.last_name,
        role: user.role,
        authorities: auth.authorities.clone(),
    })))
}
