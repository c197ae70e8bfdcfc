//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User domain entity.
///
/// Invariant: `password_hash` always holds a hash, never a plaintext
/// password. `access_token` tracks at most one token per user; each
/// successful login overwrites the previous value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with no access token issued yet
    pub fn new(id: Uuid, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            email,
            password_hash,
            access_token: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Credentials submitted on login. Transient, never persisted as-is.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

// Don't expose the plaintext password in debug output (security)
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_has_no_access_token() {
        let user = User::new(
            Uuid::new_v4(),
            "user@example.com".to_string(),
            "hashed".to_string(),
        );
        assert!(user.access_token.is_none());
    }

    #[test]
    fn credentials_debug_redacts_password() {
        let credentials = Credentials {
            email: "user@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        let rendered = format!("{:?}", credentials);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
