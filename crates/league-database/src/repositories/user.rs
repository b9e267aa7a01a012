//! User repository implementation.

use sqlx::PgPool;

use league_core::error::{AppError, ErrorKind};
use league_core::result::AppResult;
use league_core::types::pagination::{PageRequest, PageResponse};
use league_entity::user::{NewUser, UpdateUser, User, UserRole};

use super::{db_error, violates};

const USERNAME_KEY: &str = "users_username_key";

/// Repository for user CRUD and credential lookups.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find user by id"))
    }

    /// Find a user by exact (case-sensitive) username.
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find user by username"))
    }

    /// Check whether a username is taken.
    pub async fn exists_by_username(&self, username: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to check username"))
    }

    /// List all users with pagination, oldest first.
    pub async fn find_all(&self, page: PageRequest) -> AppResult<PageResponse<User>> {
        let total = self.count().await?;

        let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id LIMIT $1 OFFSET $2")
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list users"))?;

        Ok(PageResponse::new(users, page, total))
    }

    /// Insert a new user. A taken username yields a `Conflict` error.
    pub async fn create(&self, data: &NewUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password_hash, first_name, last_name, role) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(&data.username)
        .bind(&data.password_hash)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(data.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if violates(&e, USERNAME_KEY) {
                duplicate_username(&data.username)
            } else {
                AppError::with_source(ErrorKind::Database, "Failed to create user", e)
            }
        })
    }

    /// Replace a user's profile and role. Returns `None` if the user does not exist.
    pub async fn update(&self, id: i64, data: &UpdateUser) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET username = $2, first_name = $3, last_name = $4, role = $5, \
                              updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.username)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(data.role)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if violates(&e, USERNAME_KEY) {
                duplicate_username(&data.username)
            } else {
                AppError::with_source(ErrorKind::Database, "Failed to update user", e)
            }
        })
    }

    /// Change only the role of a user.
    pub async fn update_role(&self, id: i64, role: UserRole) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET role = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(role)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to update user role"))
    }

    /// Delete a user. Returns `true` if a row was removed.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete user"))?;

        Ok(result.rows_affected() > 0)
    }

    /// Count total users.
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count users"))?;
        Ok(count as u64)
    }
}

fn duplicate_username(username: &str) -> AppError {
    AppError::conflict(format!("User with username '{username}' already exists"))
}
