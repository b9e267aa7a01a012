//! # league-entity
//!
//! Domain entity models for the basketball league. Every struct in this
//! crate represents a database table row or the input used to write one.
//! Row types derive `sqlx::FromRow`.

pub mod matches;
pub mod player;
pub mod season;
pub mod team;
pub mod user;
