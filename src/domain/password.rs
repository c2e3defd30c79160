//! Password hashing for storage.
//!
//! Plaintext passwords are turned into salted Argon2id PHC strings here and
//! nowhere else.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::errors::{AppError, AppResult};

/// Hashed password ready for the user store.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash a plaintext password with a fresh random salt.
    ///
    /// Length rules belong to request validation; any input is hashed.
    pub fn new(plain_text: &str) -> AppResult<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?
            .to_string();

        Ok(Self { hash })
    }

    /// Wrap a hash previously produced by [`Password::new`].
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }

    pub fn into_string(self) -> String {
        self.hash
    }

    /// Check a plaintext candidate against this hash.
    ///
    /// A malformed stored hash never verifies.
    pub fn verify(&self, plain_text: &str) -> bool {
        PasswordHash::new(&self.hash)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(plain_text.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_not_plaintext() {
        let password = Password::new("Secret123!").unwrap();
        assert!(!password.as_str().contains("Secret123!"));
        assert!(password.as_str().starts_with("$argon2id$"));
    }

    #[test]
    fn test_hash_and_verify() {
        let password = Password::new("Secret123!").unwrap();

        assert!(password.verify("Secret123!"));
        assert!(!password.verify("Secret123?"));
    }

    #[test]
    fn test_same_password_different_salts() {
        let first = Password::new("SamePassword123").unwrap();
        let second = Password::new("SamePassword123").unwrap();

        assert_ne!(first.as_str(), second.as_str());
        assert!(first.verify("SamePassword123"));
        assert!(second.verify("SamePassword123"));
    }

    #[test]
    fn test_round_trip_through_storage() {
        let stored = Password::new("TestPassword123").unwrap().into_string();
        assert!(Password::from_hash(stored).verify("TestPassword123"));
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        assert!(!Password::from_hash("not-a-phc-string".to_string()).verify("anything"));
    }

    #[test]
    fn test_hashes_without_length_rule() {
        let password = Password::new("short").unwrap();
        assert!(password.verify("short"));
    }

    #[test]
    fn test_debug_redacts_hash() {
        let password = Password::new("Secret123!").unwrap();
        assert!(!format!("{:?}", password).contains("argon2"));
    }
}
