//! # league-service
//!
//! Business logic service layer for the league backend. Each service wraps
//! one repository (plus whatever lookups its rules need) and turns missing
//! rows, duplicates and rule violations into [`AppError`](league_core::AppError)s.
//!
//! Services follow constructor injection; all dependencies are provided
//! at construction time via `Arc` references.

pub mod matches;
pub mod player;
pub mod season;
pub mod team;
pub mod user;

pub use matches::{MatchInput, MatchService};
pub use player::{PlayerInput, PlayerService};
pub use season::{SeasonInput, SeasonService};
pub use team::{TeamInput, TeamService};
pub use user::{AdminUserService, UserService};
