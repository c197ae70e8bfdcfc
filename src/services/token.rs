//! Access token issuing.
//!
//! Wraps JWT signing behind the `TokenIssuer` capability so the use case
//! never depends on a concrete token format.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::MIN_JWT_SECRET_LENGTH;
use crate::errors::{AppError, AppResult};

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub exp: i64,
    pub iat: i64,
}

/// Token issuing capability consumed by the authentication use case.
///
/// Each call produces a fresh opaque token for the given user; tokens are
/// never reused across logins.
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    /// Generate a signed access token for a user id
    async fn generate(&self, user_id: Uuid) -> AppResult<String>;
}

/// `TokenIssuer` backed by HS256-signed JWTs.
pub struct JwtTokenIssuer {
    secret: String,
    expiration_hours: i64,
}

impl JwtTokenIssuer {
    /// Create a new issuer keyed by `secret`.
    ///
    /// # Errors
    /// Returns `MissingParam("secret")` if the secret is empty, or
    /// `InvalidParam("secret")` if it is shorter than the minimum length.
    pub fn new(secret: impl Into<String>, expiration_hours: i64) -> AppResult<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(AppError::missing_param("secret"));
        }
        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(AppError::invalid_param("secret"));
        }

        Ok(Self {
            secret,
            expiration_hours,
        })
    }
}

#[async_trait]
impl TokenIssuer for JwtTokenIssuer {
    async fn generate(&self, user_id: Uuid) -> AppResult<String> {
        if user_id.is_nil() {
            return Err(AppError::missing_param("id"));
        }

        let now = Utc::now();
        let expires_at = now + Duration::hours(self.expiration_hours);

        let claims = Claims {
            sub: user_id,
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;

        Ok(token)
    }
}
