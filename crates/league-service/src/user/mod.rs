//! User listing and admin user management services.

pub mod admin;
pub mod service;

pub use admin::AdminUserService;
pub use service::UserService;
