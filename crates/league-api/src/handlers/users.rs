//! User record handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use league_core::error::AppError;
use league_core::types::pagination::PageResponse;
use league_entity::user::UpdateUser;

use crate::dto::request::UpdateUserRequest;
use crate::dto::response::{ApiResponse, UserResponse};
use crate::extractors::{PaginationParams, ValidatedJson};
use crate::state::AppState;

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<UserResponse>>>, AppError> {
    let page = state
        .user_service
        .list(params.into_page_request())
        .await?
        .map(UserResponse::from);
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let user = state.user_service.get(id).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// PUT /api/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(req): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let user = state
        .user_service
        .update(
            id,
            UpdateUser {
                username: req.username,
                first_name: req.first_name,
                last_name: req.last_name,
                role: req.role,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.user_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
