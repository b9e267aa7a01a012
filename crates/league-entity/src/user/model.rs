//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::role::UserRole;

/// A registered league user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Database identifier.
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// Salted one-way hash of the password (PHC string).
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Role used for authorization decisions.
    pub role: UserRole,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Data required to insert a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Desired username.
    pub username: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Assigned role.
    pub role: UserRole,
}

impl NewUser {
    /// A self-registered user: no names, role `USER`.
    pub fn registered(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            first_name: None,
            last_name: None,
            role: UserRole::User,
        }
    }
}

/// Replacement values for an existing user's profile and role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New username.
    pub username: String,
    /// New given name.
    pub first_name: Option<String>,
    /// New family name.
    pub last_name: Option<String>,
    /// New role.
    pub role: UserRole,
}
