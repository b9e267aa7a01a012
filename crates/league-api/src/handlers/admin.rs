//! Admin user management handlers.

use axum::Json;
use axum::extract::{Path, State};

use league_core::error::AppError;
use league_entity::user::UserRole;

use crate::dto::request::ChangeRoleRequest;
use crate::dto::response::{ApiResponse, UserResponse};
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// PUT /api/admin/users/{id}/role
pub async fn change_role(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    ValidatedJson(req): ValidatedJson<ChangeRoleRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    auth.require_role(UserRole::Admin)?;
    let user = state.admin_user_service.change_role(id, req.role).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}
