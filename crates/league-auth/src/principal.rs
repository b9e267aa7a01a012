//! Request-scoped authenticated identity.

use serde::Serialize;

use league_entity::user::{User, UserRole};

/// The caller of one request, as established by the authentication filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Principal {
    /// Identity id.
    pub user_id: i64,
    /// Identity login.
    pub username: String,
    /// Identity role.
    pub role: UserRole,
    /// Authorities granted by the role (`ROLE_<NAME>`).
    pub authorities: Vec<String>,
}

impl Principal {
    /// Builds the principal for a stored identity.
    pub fn from_user(user: &User) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
            role: user.role,
            authorities: vec![user.role.authority()],
        }
    }

    /// Whether the named authority was granted.
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.iter().any(|a| a == authority)
    }

    /// Whether the role's authority was granted.
    pub fn has_role(&self, role: UserRole) -> bool {
        self.has_authority(&role.authority())
    }

    /// Check if the principal is an admin.
    pub fn is_admin(&self) -> bool {
        self.has_role(UserRole::Admin)
    }
}
