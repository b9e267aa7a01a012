//! Request handlers, one module per resource.

pub mod admin;
pub mod auth;
pub mod health;
pub mod matches;
pub mod players;
pub mod seasons;
pub mod teams;
pub mod users;
