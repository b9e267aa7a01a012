//! User reads and admin edits of user records.

use std::sync::Arc;

use tracing::info;

use league_core::error::AppError;
use league_core::types::pagination::{PageRequest, PageResponse};
use league_database::repositories::UserRepository;
use league_entity::user::{UpdateUser, User};

/// Handles user record operations exposed under `/api/users`.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Lists users with pagination.
    pub async fn list(&self, page: PageRequest) -> Result<PageResponse<User>, AppError> {
        self.user_repo.find_all(page).await
    }

    /// Gets one user.
    pub async fn get(&self, id: i64) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| user_not_found(id))
    }

    /// Replaces a user's username, names and role.
    pub async fn update(&self, id: i64, data: UpdateUser) -> Result<User, AppError> {
        let username = data.username.trim();
        if username.is_empty() {
            return Err(AppError::validation("Username must not be blank"));
        }

        if let Some(existing) = self.user_repo.find_by_username(username).await? {
            if existing.id != id {
                return Err(AppError::conflict(format!(
                    "User with username '{username}' already exists"
                )));
            }
        }

        let data = UpdateUser {
            username: username.to_string(),
            ..data
        };
        let user = self
            .user_repo
            .update(id, &data)
            .await?
            .ok_or_else(|| user_not_found(id))?;

        info!(user_id = user.id, username = %user.username, "User updated");
        Ok(user)
    }

    /// Deletes a user.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.user_repo.delete(id).await? {
            return Err(user_not_found(id));
        }
        info!(user_id = id, "User deleted");
        Ok(())
    }
}

pub(crate) fn user_not_found(id: i64) -> AppError {
    AppError::not_found(format!("User not found with id: {id}"))
}
