//! In-memory credential store for tests and single-process embedding.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use league_core::error::AppError;
use league_core::result::AppResult;
use league_entity::user::{NewUser, User};

use super::CredentialStore;

/// Identities keyed by login in a concurrent map.
///
/// Uniqueness is enforced by the map entry lock, so concurrent `save`
/// calls for the same login cannot both succeed.
#[derive(Debug)]
pub struct MemoryCredentialStore {
    users: DashMap<String, User>,
    next_id: AtomicI64,
}

impl MemoryCredentialStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored identities.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns `true` if no identity is stored.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for MemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>> {
        Ok(self.users.get(login).map(|entry| entry.value().clone()))
    }

    async fn exists_by_login(&self, login: &str) -> AppResult<bool> {
        Ok(self.users.contains_key(login))
    }

    async fn save(&self, identity: NewUser) -> AppResult<User> {
        match self.users.entry(identity.username.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "User with username '{}' already exists",
                identity.username
            ))),
            Entry::Vacant(slot) => {
                let now = Utc::now();
                let user = User {
                    id: self.next_id.fetch_add(1, Ordering::Relaxed),
                    username: identity.username,
                    password_hash: identity.password_hash,
                    first_name: identity.first_name,
                    last_name: identity.last_name,
                    role: identity.role,
                    created_at: now,
                    updated_at: now,
                };
                slot.insert(user.clone());
                Ok(user)
            }
        }
    }
}
