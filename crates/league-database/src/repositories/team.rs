//! Team repository implementation.

use sqlx::PgPool;

use league_core::error::{AppError, ErrorKind};
use league_core::result::AppResult;
use league_entity::team::{NewTeam, Team};

use super::{db_error, violates};

const NAME_KEY: &str = "teams_name_lower_key";

/// Repository for team CRUD.
#[derive(Debug, Clone)]
pub struct TeamRepository {
    pool: PgPool,
}

impl TeamRepository {
    /// Create a new team repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every team ordered by name.
    pub async fn find_all(&self) -> AppResult<Vec<Team>> {
        sqlx::query_as::<_, Team>("SELECT * FROM teams ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list teams"))
    }

    /// Find a team by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Team>> {
        sqlx::query_as::<_, Team>("SELECT * FROM teams WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find team"))
    }

    /// Check whether another team already uses `name`, ignoring case.
    pub async fn exists_by_name(&self, name: &str, excluding: Option<i64>) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM teams \
             WHERE LOWER(name) = LOWER($1) AND ($2::BIGINT IS NULL OR id <> $2))",
        )
        .bind(name)
        .bind(excluding)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to check team name"))
    }

    /// Insert a new team.
    pub async fn create(&self, data: &NewTeam) -> AppResult<Team> {
        sqlx::query_as::<_, Team>("INSERT INTO teams (name) VALUES ($1) RETURNING *")
            .bind(&data.name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_write_error(e, &data.name, "Failed to create team"))
    }

    /// Replace a team. Returns `None` if it does not exist.
    pub async fn update(&self, id: i64, data: &NewTeam) -> AppResult<Option<Team>> {
        sqlx::query_as::<_, Team>("UPDATE teams SET name = $2 WHERE id = $1 RETURNING *")
            .bind(id)
            .bind(&data.name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_write_error(e, &data.name, "Failed to update team"))
    }

    /// Delete a team. Returns `true` if a row was removed.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if matches!(&e, sqlx::Error::Database(db) if db.is_foreign_key_violation()) {
                    AppError::conflict(format!("Team {id} still has scheduled matches"))
                } else {
                    AppError::with_source(ErrorKind::Database, "Failed to delete team", e)
                }
            })?;
        Ok(result.rows_affected() > 0)
    }
}

fn map_write_error(e: sqlx::Error, name: &str, context: &'static str) -> AppError {
    if violates(&e, NAME_KEY) {
        AppError::conflict(format!("Team already exists: {name}"))
    } else {
        AppError::with_source(ErrorKind::Database, context, e)
    }
}
