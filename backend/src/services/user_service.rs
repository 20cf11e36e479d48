//! User business logic service.
//!
//! Handles registration, password authentication and the authenticated
//! profile update.

use crate::api::user::models::{CreateUserRequest, UpdateUserRequest};
use crate::database::models::{CreateUser, User};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::user_repository::UserRepository;
use crate::utils::password::{hash_password, verify_password};
use validator::Validate;

pub struct UserService<'a> {
    /// Shared credential store
    users: &'a dyn UserRepository,
    /// bcrypt cost applied to new passwords
    password_hash_cost: u32,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// * `users` - Credential store
    /// * `password_hash_cost` - bcrypt cost factor for new passwords
    pub fn new(users: &'a dyn UserRepository, password_hash_cost: u32) -> Self {
        Self {
            users,
            password_hash_cost,
        }
    }

    /// Registers a new user.
    ///
    /// # Returns
    /// The newly created User with its assigned id
    ///
    /// # Errors
    /// Returns `ServiceError` for:
    /// - Validation failures
    /// - An email that is already registered
    /// - Hashing failures
    pub async fn create_user(&self, request: CreateUserRequest) -> ServiceResult<User> {
        request.validate()?;

        // Skip the expensive hash for an obvious duplicate; the store still
        // decides races between concurrent registrations.
        if self.users.get_user_by_email(&request.email).await?.is_some() {
            return Err(ServiceError::already_exists("User", request.email));
        }

        let password_hash = hash_password(request.password, self.password_hash_cost).await?;

        let user = self
            .users
            .create_user(CreateUser {
                email: request.email,
                password_hash,
            })
            .await?;

        tracing::info!("Registered user {} ({})", user.id, user.email);
        Ok(user)
    }

    /// Checks an email/password pair against the store.
    ///
    /// # Errors
    /// - `ServiceError::UnknownIdentity` if no user has this email
    /// - `ServiceError::InvalidCredentials` if the password does not match
    pub async fn authenticate_user(&self, email: &str, password: &str) -> ServiceResult<User> {
        let user = self
            .users
            .get_user_by_email(email)
            .await?
            .ok_or_else(|| ServiceError::unknown_identity(email))?;

        if !verify_password(password.to_string(), user.password_hash.clone()).await? {
            return Err(ServiceError::invalid_credentials(email));
        }

        Ok(user)
    }

    /// Resolves the user named by a verified token subject.
    ///
    /// # Errors
    /// Returns `ServiceError::InvalidToken` if the subject has no record, so the
    /// caller is treated as unauthenticated.
    pub async fn get_user_by_subject_required(&self, subject: &str) -> ServiceResult<User> {
        self.users
            .get_user_by_subject(subject)
            .await?
            .ok_or_else(|| ServiceError::invalid_token(format!("Unknown subject: {}", subject)))
    }

    /// Handles a profile update from an authenticated user.
    ///
    /// Email and password hash are immutable, so the stored record is returned
    /// as is once the payload has been validated.
    pub async fn update_user(
        &self,
        subject: &str,
        request: UpdateUserRequest,
    ) -> ServiceResult<User> {
        request.validate()?;

        let user = self.get_user_by_subject_required(subject).await?;
        tracing::debug!(
            "Profile update for user {} accepted without changes (requested email: {})",
            user.id,
            request.email
        );

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::user_repository::InMemoryUserRepository;

    const TEST_COST: u32 = 4;

    fn register_request(email: &str, password: &str) -> CreateUserRequest {
        CreateUserRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_user_stores_digest_not_password() {
        let repo = InMemoryUserRepository::new();
        let service = UserService::new(&repo, TEST_COST);

        let user = service
            .create_user(register_request("a@b.com", "secret123"))
            .await
            .unwrap();

        assert_eq!(user.id, 1);
        assert_ne!(user.password_hash, "secret123");
        assert!(verify_password("secret123".to_string(), user.password_hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_create_user_rejects_duplicates_and_bad_input() {
        let repo = InMemoryUserRepository::new();
        let service = UserService::new(&repo, TEST_COST);
        service
            .create_user(register_request("a@b.com", "secret123"))
            .await
            .unwrap();

        let duplicate = service.create_user(register_request("a@b.com", "other")).await;
        assert!(matches!(duplicate, Err(ServiceError::AlreadyExists { .. })));

        let bad_email = service.create_user(register_request("not-an-email", "x")).await;
        assert!(matches!(bad_email, Err(ServiceError::Validation { .. })));

        let empty_password = service.create_user(register_request("c@d.com", "")).await;
        assert!(matches!(empty_password, Err(ServiceError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_authenticate_user_outcomes() {
        let repo = InMemoryUserRepository::new();
        let service = UserService::new(&repo, TEST_COST);
        service
            .create_user(register_request("a@b.com", "secret123"))
            .await
            .unwrap();

        let user = service.authenticate_user("a@b.com", "secret123").await.unwrap();
        assert_eq!(user.email, "a@b.com");

        let wrong = service.authenticate_user("a@b.com", "wrong").await;
        assert!(matches!(wrong, Err(ServiceError::InvalidCredentials { .. })));

        let unknown = service.authenticate_user("ghost@b.com", "secret123").await;
        assert!(matches!(unknown, Err(ServiceError::UnknownIdentity { .. })));
    }

    #[tokio::test]
    async fn test_update_user_returns_stored_record_unchanged() {
        let repo = InMemoryUserRepository::new();
        let service = UserService::new(&repo, TEST_COST);
        let created = service
            .create_user(register_request("a@b.com", "secret123"))
            .await
            .unwrap();

        let updated = service
            .update_user(
                "a@b.com",
                UpdateUserRequest {
                    email: "new@b.com".to_string(),
                    password: "new".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.email, "a@b.com");
        assert_eq!(updated.password_hash, created.password_hash);
    }

    #[tokio::test]
    async fn test_update_user_for_unknown_subject() {
        let repo = InMemoryUserRepository::new();
        let service = UserService::new(&repo, TEST_COST);

        let result = service
            .update_user(
                "ghost@b.com",
                UpdateUserRequest {
                    email: "ghost@b.com".to_string(),
                    password: "new".to_string(),
                },
            )
            .await;

        assert!(matches!(result, Err(ServiceError::InvalidToken { .. })));
    }
}
