//! User persistence - lookup and access-token writes.
//!
//! Two narrow capabilities instead of one wide repository: the use case
//! only ever reads a user by email and overwrites that user's access
//! token. `UserStore` implements both against SeaORM.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use super::entities::user::{self, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

/// Read capability: load a user record by email.
#[async_trait]
pub trait UserLookupRepository: Send + Sync {
    /// Returns the user for `email`, or `None` if no such user exists.
    ///
    /// # Errors
    /// `MissingParam("email")` if `email` is empty; storage errors
    /// propagate unchanged.
    async fn load(&self, email: &str) -> AppResult<Option<User>>;
}

/// Write capability: overwrite a user's access token.
#[async_trait]
pub trait UpdateTokenRepository: Send + Sync {
    /// Persist `access_token` against the user identified by `user_id`.
    ///
    /// Last writer wins; concurrent logins for the same user are not
    /// ordered.
    ///
    /// # Errors
    /// `MissingParam("user_id")` / `MissingParam("access_token")` if either
    /// argument is unset; fails if no user row matches `user_id` (the user
    /// may have been deleted since it was loaded); storage errors propagate
    /// unchanged.
    async fn update(&self, user_id: Uuid, access_token: &str) -> AppResult<()>;
}

/// SeaORM-backed implementation of both user persistence capabilities.
pub struct UserStore {
    db: Arc<DatabaseConnection>,
}

impl UserStore {
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }
}

#[async_trait]
impl UserLookupRepository for UserStore {
    async fn load(&self, email: &str) -> AppResult<Option<User>> {
        if email.is_empty() {
            return Err(AppError::missing_param("email"));
        }

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await?;

        Ok(result.map(User::from))
    }
}

#[async_trait]
impl UpdateTokenRepository for UserStore {
    async fn update(&self, user_id: Uuid, access_token: &str) -> AppResult<()> {
        if user_id.is_nil() {
            return Err(AppError::missing_param("user_id"));
        }
        if access_token.is_empty() {
            return Err(AppError::missing_param("access_token"));
        }

        let result = UserEntity::update_many()
            .col_expr(user::Column::AccessToken, Expr::value(access_token))
            .col_expr(user::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(user::Column::Id.eq(user_id))
            .exec(self.db.as_ref())
            .await?;

        // A token the caller reports as persisted must actually be stored;
        // the user can vanish between the lookup and this write.
        if result.rows_affected == 0 {
            return Err(AppError::internal(format!(
                "access token update matched no user {}",
                user_id
            )));
        }

        Ok(())
    }
}
