//! Match handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use league_core::error::AppError;
use league_entity::matches::Match;
use league_service::MatchInput;

use crate::dto::request::MatchFilter;
use crate::dto::response::ApiResponse;
use crate::state::AppState;

/// GET /api/matches?season_id=
pub async fn list_matches(
    State(state): State<AppState>,
    Query(filter): Query<MatchFilter>,
) -> Result<Json<ApiResponse<Vec<Match>>>, AppError> {
    let matches = state.match_service.list(filter.season_id).await?;
    Ok(Json(ApiResponse::ok(matches)))
}

/// GET /api/matches/{id}
pub async fn get_match(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Match>>, AppError> {
    Ok(Json(ApiResponse::ok(state.match_service.get(id).await?)))
}

/// POST /api/matches
pub async fn create_match(
    State(state): State<AppState>,
    Json(input): Json<MatchInput>,
) -> Result<(StatusCode, Json<ApiResponse<Match>>), AppError> {
    let created = state.match_service.create(input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(created))))
}

/// PUT /api/matches/{id}
pub async fn update_match(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<MatchInput>,
) -> Result<Json<ApiResponse<Match>>, AppError> {
    Ok(Json(ApiResponse::ok(
        state.match_service.update(id, input).await?,
    )))
}

/// DELETE /api/matches/{id}
pub async fn delete_match(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.match_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
