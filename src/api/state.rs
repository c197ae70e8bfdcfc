//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{Database, UserStore};
use crate::services::{ArgonComparator, AuthService, Authenticator, JwtTokenIssuer};
use crate::utils::{EmailFormatChecker, EmailFormatValidator};

/// Application state containing the services the router depends on.
#[derive(Clone)]
pub struct AppState {
    /// Authentication use case
    pub auth_service: Arc<dyn AuthService>,
    /// Email format validator, consulted before delegating to the use case
    pub email_validator: Arc<dyn EmailFormatValidator>,
}

impl AppState {
    /// Wire the production collaborators from a database connection and
    /// config.
    ///
    /// # Errors
    /// Fails if the token issuer secret is unset/too short or if any use
    /// case dependency slot is left unfilled.
    pub fn from_config(database: &Database, config: &Config) -> AppResult<Self> {
        let store = Arc::new(UserStore::new(database.get_connection()));
        let issuer = JwtTokenIssuer::new(config.jwt_secret(), config.jwt_expiration_hours)?;

        let auth_service = Authenticator::builder()
            .user_lookup(store.clone())
            .password_comparator(Arc::new(ArgonComparator))
            .token_issuer(Arc::new(issuer))
            .token_writer(store)
            .build()?;

        Ok(Self {
            auth_service: Arc::new(auth_service),
            email_validator: Arc::new(EmailFormatChecker),
        })
    }

    /// Create application state with manually injected services (tests).
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        email_validator: Arc<dyn EmailFormatValidator>,
    ) -> Self {
        Self {
            auth_service,
            email_validator,
        }
    }
}
