//! Season repository implementation.

use sqlx::PgPool;

use league_core::error::{AppError, ErrorKind};
use league_core::result::AppResult;
use league_entity::season::{NewSeason, Season};

use super::{db_error, violates};

const NAME_KEY: &str = "seasons_name_lower_key";

/// Repository for season CRUD.
#[derive(Debug, Clone)]
pub struct SeasonRepository {
    pool: PgPool,
}

impl SeasonRepository {
    /// Create a new season repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List seasons, most recent first.
    pub async fn find_all(&self) -> AppResult<Vec<Season>> {
        sqlx::query_as::<_, Season>("SELECT * FROM seasons ORDER BY start_date DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list seasons"))
    }

    /// Find a season by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Season>> {
        sqlx::query_as::<_, Season>("SELECT * FROM seasons WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find season"))
    }

    /// Check whether another season already uses `name`, ignoring case.
    pub async fn exists_by_name(&self, name: &str, excluding: Option<i64>) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM seasons \
             WHERE LOWER(name) = LOWER($1) AND ($2::BIGINT IS NULL OR id <> $2))",
        )
        .bind(name)
        .bind(excluding)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to check season name"))
    }

    /// Insert a new season.
    pub async fn create(&self, data: &NewSeason) -> AppResult<Season> {
        sqlx::query_as::<_, Season>(
            "INSERT INTO seasons (name, start_date, end_date) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.name)
        .bind(data.start_date)
        .bind(data.end_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &data.name, "Failed to create season"))
    }

    /// Replace a season. Returns `None` if it does not exist.
    pub async fn update(&self, id: i64, data: &NewSeason) -> AppResult<Option<Season>> {
        sqlx::query_as::<_, Season>(
            "UPDATE seasons SET name = $2, start_date = $3, end_date = $4 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(data.start_date)
        .bind(data.end_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &data.name, "Failed to update season"))
    }

    /// Delete a season and its matches. Returns `true` if a row was removed.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM seasons WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete season"))?;
        Ok(result.rows_affected() > 0)
    }
}

fn map_write_error(e: sqlx::Error, name: &str, context: &'static str) -> AppError {
    if violates(&e, NAME_KEY) {
        AppError::conflict(format!("Season already exists: {name}"))
    } else {
        AppError::with_source(ErrorKind::Database, context, e)
    }
}
