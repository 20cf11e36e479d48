//! Credential store for identity records.
//!
//! Provides create and lookup operations for users keyed by email, plus the
//! refresh-token update performed on every successful login.

use crate::database::models::{CreateUser, RefreshToken, User};
use crate::errors::{ServiceError, ServiceResult};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Storage abstraction for user records.
///
/// Every operation is atomic with respect to concurrent callers. Records are
/// returned by value; changes go back through the store.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user and assigns the next id.
    ///
    /// # Errors
    /// Returns `ServiceError::AlreadyExists` if the email is already registered.
    async fn create_user(&self, user: CreateUser) -> ServiceResult<User>;

    /// Retrieves a user by email. Absence is not an error.
    async fn get_user_by_email(&self, email: &str) -> ServiceResult<Option<User>>;

    /// Retrieves the user named by a verified token subject.
    async fn get_user_by_subject(&self, subject: &str) -> ServiceResult<Option<User>> {
        self.get_user_by_email(subject).await
    }

    /// Retrieves the user currently holding `token` as refresh token.
    async fn get_user_by_refresh_token(&self, token: &str) -> ServiceResult<Option<User>>;

    /// Replaces the refresh token and its expiry in a single update.
    ///
    /// # Errors
    /// Returns `ServiceError::NotFound` if no user has this email.
    async fn set_refresh_token(&self, email: &str, refresh_token: RefreshToken)
    -> ServiceResult<()>;
}

/// Process-lifetime store guarded by a single lock over the whole table.
#[derive(Default)]
pub struct InMemoryUserRepository {
    table: RwLock<UserTable>,
}

/// Users keyed by email, plus an index from each live refresh token to the
/// email holding it. Both maps change under the same write guard.
#[derive(Default)]
struct UserTable {
    users: HashMap<String, User>,
    refresh_tokens: HashMap<String, String>,
}

impl InMemoryUserRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_user(&self, user: CreateUser) -> ServiceResult<User> {
        let mut table = self.table.write().await;

        if table.users.contains_key(&user.email) {
            return Err(ServiceError::already_exists("User", user.email));
        }

        // Records are never deleted, so the table size is the last id handed out.
        let created = User {
            id: table.users.len() as i64 + 1,
            email: user.email,
            password_hash: user.password_hash,
            refresh_token: None,
        };
        table.users.insert(created.email.clone(), created.clone());

        tracing::debug!("Created user {} with id {}", created.email, created.id);
        Ok(created)
    }

    async fn get_user_by_email(&self, email: &str) -> ServiceResult<Option<User>> {
        Ok(self.table.read().await.users.get(email).cloned())
    }

    async fn get_user_by_refresh_token(&self, token: &str) -> ServiceResult<Option<User>> {
        let table = self.table.read().await;
        let user = table
            .refresh_tokens
            .get(token)
            .and_then(|email| table.users.get(email));

        Ok(user.cloned())
    }

    async fn set_refresh_token(
        &self,
        email: &str,
        refresh_token: RefreshToken,
    ) -> ServiceResult<()> {
        let mut table = self.table.write().await;
        let UserTable {
            users,
            refresh_tokens,
        } = &mut *table;

        let user = users
            .get_mut(email)
            .ok_or_else(|| ServiceError::not_found("User", email))?;

        if let Some(previous) = user.refresh_token.take() {
            refresh_tokens.remove(&previous.token);
        }
        refresh_tokens.insert(refresh_token.token.clone(), user.email.clone());
        user.refresh_token = Some(refresh_token);
        Ok(())
    }
}
