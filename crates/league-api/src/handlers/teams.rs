//! Team handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use league_core::error::AppError;
use league_entity::team::Team;
use league_service::TeamInput;

use crate::dto::response::ApiResponse;
use crate::state::AppState;

/// GET /api/teams
pub async fn list_teams(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Team>>>, AppError> {
    Ok(Json(ApiResponse::ok(state.team_service.list().await?)))
}

/// GET /api/teams/{id}
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Team>>, AppError> {
    Ok(Json(ApiResponse::ok(state.team_service.get(id).await?)))
}

/// POST /api/teams
pub async fn create_team(
    State(state): State<AppState>,
    Json(input): Json<TeamInput>,
) -> Result<(StatusCode, Json<ApiResponse<Team>>), AppError> {
    let team = state.team_service.create(input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(team))))
}

/// PUT /api/teams/{id}
pub async fn update_team(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<TeamInput>,
) -> Result<Json<ApiResponse<Team>>, AppError> {
    Ok(Json(ApiResponse::ok(
        state.team_service.update(id, input).await?,
    )))
}

/// DELETE /api/teams/{id}
pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.team_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
