//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use league_entity::user::UserRole;

/// Sign-up and sign-in request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CredentialsRequest {
    /// Login.
    #[serde(alias = "login")]
    #[validate(
        length(min = 1, max = 100, message = "Username must be 1 to 100 characters"),
        custom(function = "not_blank", message = "Username is required")
    )]
    pub username: String,
    /// Plaintext secret.
    #[serde(alias = "secret")]
    #[validate(custom(function = "not_blank", message = "Password is required"))]
    pub password: String,
}

/// Replace a user record.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(
        length(min = 1, max = 100, message = "Username must be 1 to 100 characters"),
        custom(function = "not_blank", message = "Username is required")
    )]
    pub username: String,
    #[validate(length(max = 100))]
    pub first_name: Option<String>,
    #[validate(length(max = 100))]
    pub last_name: Option<String>,
    pub role: UserRole,
}

/// Change a user's role.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangeRoleRequest {
    /// New role (`USER` or `ADMIN`).
    pub role: UserRole,
}

/// `team_id` filter for player listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerFilter {
    pub team_id: Option<i64>,
}

/// `season_id` filter for match listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchFilter {
    pub season_id: Option<i64>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
