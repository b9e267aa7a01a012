//! Admin-only role management.

use std::sync::Arc;

use tracing::info;

use league_core::error::AppError;
use league_database::repositories::UserRepository;
use league_entity::user::{User, UserRole};

use super::service::user_not_found;

/// Handles administrative user operations under `/api/admin`.
#[derive(Debug, Clone)]
pub struct AdminUserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
}

impl AdminUserService {
    /// Creates a new admin user service.
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Changes a user's role.
    pub async fn change_role(&self, user_id: i64, role: UserRole) -> Result<User, AppError> {
        let user = self
            .user_repo
            .update_role(user_id, role)
            .await?
            .ok_or_else(|| user_not_found(user_id))?;

        info!(user_id, role = %role, "User role changed");
        Ok(user)
    }
}
