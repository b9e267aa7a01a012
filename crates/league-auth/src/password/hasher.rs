//! Argon2id password hashing and verification.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        Error as HashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
        rand_core::OsRng,
    },
};

use league_core::error::AppError;

/// One-way, salted password hashing with Argon2id (PHC string output).
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Creates a hasher with the default Argon2id parameters.
    pub fn new() -> Self {
        Self::default()
    }

    fn argon2(&self) -> Argon2<'_> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hashes a plaintext password with a fresh random salt.
    pub fn hash(&self, plaintext: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2()
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
    }

    /// Compares a plaintext password with a stored PHC hash.
    ///
    /// A mismatch is `Ok(false)`; only a corrupt stored hash is an error.
    pub fn verify(&self, plaintext: &str, stored: &str) -> Result<bool, AppError> {
        let parsed = PasswordHash::new(stored)
            .map_err(|e| AppError::internal(format!("Stored password hash is corrupt: {e}")))?;

        match self.argon2().verify_password(plaintext.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(HashError::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("pw1").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("pw1"));
        assert!(hasher.verify("pw1", &hash).unwrap());
        assert!(!hasher.verify("pw2", &hash).unwrap());
    }

    #[test]
    fn test_salt_differs_per_hash() {
        let hasher = PasswordHasher::new();
        assert_ne!(hasher.hash("same").unwrap(), hasher.hash("same").unwrap());
    }

    #[test]
    fn test_corrupt_hash_is_error() {
        let hasher = PasswordHasher::new();
        assert!(hasher.verify("pw", "plaintext-not-a-hash").is_err());
    }
}
