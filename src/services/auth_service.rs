//! Authentication use case.
//!
//! Orchestrates credential validation, user lookup, password comparison,
//! token issuing and token persistence into the single auth decision.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::Credentials;
use crate::errors::{AppError, AppResult};
use crate::infra::{UpdateTokenRepository, UserLookupRepository};
use crate::services::{PasswordComparator, TokenIssuer};

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Authenticate credentials.
    ///
    /// Returns `Ok(Some(token))` on success and `Ok(None)` when the user is
    /// unknown or the password does not match — invalid credentials are a
    /// business outcome, not an error. `Err` is reserved for contract
    /// violations (empty parameters) and collaborator failures, which
    /// propagate unwrapped.
    async fn authenticate(&self, credentials: &Credentials) -> AppResult<Option<String>>;
}

/// Concrete `AuthService` over four injected collaborators.
///
/// Construct via [`Authenticator::builder`], which verifies every
/// dependency slot is filled before any request is served.
pub struct Authenticator {
    user_lookup: Arc<dyn UserLookupRepository>,
    comparator: Arc<dyn PasswordComparator>,
    token_issuer: Arc<dyn TokenIssuer>,
    token_writer: Arc<dyn UpdateTokenRepository>,
}

impl Authenticator {
    pub fn builder() -> AuthenticatorBuilder {
        AuthenticatorBuilder::default()
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn authenticate(&self, credentials: &Credentials) -> AppResult<Option<String>> {
        if credentials.email.is_empty() {
            return Err(AppError::missing_param("email"));
        }
        if credentials.password.is_empty() {
            return Err(AppError::missing_param("password"));
        }

        // Short-circuit: an unknown user must never reach the comparator,
        // and a failed comparison must never issue or persist a token.
        let Some(user) = self.user_lookup.load(&credentials.email).await? else {
            return Ok(None);
        };

        if !self
            .comparator
            .compare(&credentials.password, &user.password_hash)
            .await?
        {
            return Ok(None);
        }

        let access_token = self.token_issuer.generate(user.id).await?;
        self.token_writer.update(user.id, &access_token).await?;

        Ok(Some(access_token))
    }
}

/// Builder that performs the once-at-construction dependency checks.
///
/// A missing collaborator surfaces as a precise `MissingParam` naming the
/// slot, instead of a null-capability failure deep in the call chain.
#[derive(Default)]
pub struct AuthenticatorBuilder {
    user_lookup: Option<Arc<dyn UserLookupRepository>>,
    comparator: Option<Arc<dyn PasswordComparator>>,
    token_issuer: Option<Arc<dyn TokenIssuer>>,
    token_writer: Option<Arc<dyn UpdateTokenRepository>>,
}

impl AuthenticatorBuilder {
    pub fn user_lookup(mut self, repository: Arc<dyn UserLookupRepository>) -> Self {
        self.user_lookup = Some(repository);
        self
    }

    pub fn password_comparator(mut self, comparator: Arc<dyn PasswordComparator>) -> Self {
        self.comparator = Some(comparator);
        self
    }

    pub fn token_issuer(mut self, issuer: Arc<dyn TokenIssuer>) -> Self {
        self.token_issuer = Some(issuer);
        self
    }

    pub fn token_writer(mut self, repository: Arc<dyn UpdateTokenRepository>) -> Self {
        self.token_writer = Some(repository);
        self
    }

    /// Check every dependency slot and assemble the use case.
    ///
    /// # Errors
    /// Returns `MissingParam` naming the first unfilled slot, in wiring
    /// order: lookup repository, comparator, issuer, token writer.
    pub fn build(self) -> AppResult<Authenticator> {
        let user_lookup = self
            .user_lookup
            .ok_or_else(|| AppError::missing_param("load_user_repository"))?;
        let comparator = self
            .comparator
            .ok_or_else(|| AppError::missing_param("password_comparator"))?;
        let token_issuer = self
            .token_issuer
            .ok_or_else(|| AppError::missing_param("token_issuer"))?;
        let token_writer = self
            .token_writer
            .ok_or_else(|| AppError::missing_param("update_token_repository"))?;

        Ok(Authenticator {
            user_lookup,
            comparator,
            token_issuer,
            token_writer,
        })
    }
}
