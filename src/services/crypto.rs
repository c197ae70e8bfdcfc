//! Password comparison capability.

use async_trait::async_trait;

use crate::domain::Password;
use crate::errors::AppResult;

/// Compares a plaintext password against a stored hash.
///
/// Consumed by the authentication use case; implementations decide the
/// hashing scheme.
#[async_trait]
pub trait PasswordComparator: Send + Sync {
    /// Returns true if `plain_text` matches `hash`
    async fn compare(&self, plain_text: &str, hash: &str) -> AppResult<bool>;
}

/// `PasswordComparator` backed by the Argon2 `Password` value object.
///
/// A hash that fails to parse compares as false rather than erroring, so
/// a corrupt stored hash behaves like a wrong password.
pub struct ArgonComparator;

#[async_trait]
impl PasswordComparator for ArgonComparator {
    async fn compare(&self, plain_text: &str, hash: &str) -> AppResult<bool> {
        let stored = Password::from_hash(hash.to_string());
        Ok(stored.verify(plain_text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn matching_password_compares_true() {
        let hash = Password::new("CorrectHorse1").unwrap().into_string();
        let comparator = ArgonComparator;

        assert!(comparator.compare("CorrectHorse1", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn wrong_password_compares_false() {
        let hash = Password::new("CorrectHorse1").unwrap().into_string();
        let comparator = ArgonComparator;

        assert!(!comparator.compare("BatteryStaple2", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn malformed_hash_compares_false() {
        let comparator = ArgonComparator;
        assert!(!comparator.compare("anything", "garbage").await.unwrap());
    }
}
