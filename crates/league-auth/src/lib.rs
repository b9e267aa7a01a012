//! # league-auth
//!
//! Authentication and authorization for the league backend.
//!
//! ## Modules
//!
//! - `jwt`: signed, time-bounded bearer tokens (issue, decode, validity checks)
//! - `password`: Argon2id password hashing
//! - `store`: the credential store contract and its PostgreSQL / in-memory implementations
//! - `authenticator`: sign-up and sign-in flows
//! - `filter`: per-request bearer token authentication
//! - `policy`: declarative role-based route access rules

pub mod authenticator;
pub mod error;
pub mod filter;
pub mod jwt;
pub mod password;
pub mod policy;
pub mod principal;
pub mod store;

pub use authenticator::Authenticator;
pub use error::AuthError;
pub use filter::{AuthenticationFilter, FilterOutcome};
pub use jwt::{Claims, ExtraClaims, SigningKey, TokenCodec};
pub use password::PasswordHasher;
pub use policy::{AccessDecision, AccessPolicy, AccessRule, Requirement};
pub use principal::Principal;
pub use store::{CredentialStore, MemoryCredentialStore};
