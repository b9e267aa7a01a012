//! User domain entities.

pub mod model;
pub mod role;

pub use model::{NewUser, UpdateUser, User};
pub use role::UserRole;
