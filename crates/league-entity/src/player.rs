//! Player entity.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A player, optionally attached to a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Player {
    /// Database identifier.
    pub id: i64,
    /// Owning team, if the player is signed.
    pub team_id: Option<i64>,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Court position (e.g. "PG", "C").
    pub position: Option<String>,
    /// Age in years.
    pub age: Option<i32>,
    /// Height in centimetres.
    pub height: Option<i32>,
    /// Weight in kilograms.
    pub weight: Option<i32>,
}

/// Values written on player create and replace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPlayer {
    /// Owning team.
    pub team_id: Option<i64>,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Court position.
    pub position: Option<String>,
    /// Age in years.
    pub age: Option<i32>,
    /// Height in centimetres.
    pub height: Option<i32>,
    /// Weight in kilograms.
    pub weight: Option<i32>,
}
