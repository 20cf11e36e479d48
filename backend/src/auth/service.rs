//! Core business logic for the authentication system.

use crate::app::AppState;
use crate::auth::models::*;
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::user_repository::UserRepository;
use crate::services::user_service::UserService;
use crate::utils::jwt::JwtUtils;
use crate::utils::refresh_token::generate_refresh_token;
use chrono::{DateTime, Duration, Utc};

/// Authentication service for handling login and token issuance
pub struct AuthService<'a> {
    users: &'a dyn UserRepository,
    user_service: UserService<'a>,
    jwt_utils: &'a JwtUtils,
    refresh_token_ttl: Duration,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService instance
    pub fn new(state: &'a AppState) -> Self {
        AuthService {
            users: state.users.as_ref(),
            user_service: state.user_service(),
            jwt_utils: state.jwt_utils.as_ref(),
            refresh_token_ttl: Duration::days(state.config.refresh_token_expires_in_days as i64),
        }
    }

    /// Authenticate user and issue an access token plus a fresh refresh token
    pub async fn login(
        &self,
        login_request: LoginRequest,
        now: DateTime<Utc>,
    ) -> ServiceResult<LoginResponse> {
        let user = self
            .user_service
            .authenticate_user(&login_request.email, &login_request.password)
            .await?;

        let access_token = self.jwt_utils.generate_token(&user.email, now)?;
        let refresh_token = generate_refresh_token(now, self.refresh_token_ttl)?;

        // Replaces any refresh token from an earlier login.
        self.users
            .set_refresh_token(&user.email, refresh_token.clone())
            .await?;

        tracing::info!("User {} logged in", user.id);

        Ok(LoginResponse {
            id: user.id,
            email: user.email,
            token: access_token,
            refresh_token: refresh_token.token,
        })
    }

    /// Exchange a stored, unexpired refresh token for a new access token.
    ///
    /// The refresh token itself is not rotated.
    pub async fn refresh_token(
        &self,
        refresh_token: &str,
        now: DateTime<Utc>,
    ) -> ServiceResult<RefreshTokenResponse> {
        let user = self
            .users
            .get_user_by_refresh_token(refresh_token)
            .await?
            .ok_or_else(|| ServiceError::invalid_token("Unknown refresh token"))?;

        let is_valid = user
            .refresh_token
            .as_ref()
            .is_some_and(|stored| stored.is_valid_at(refresh_token, now));
        if !is_valid {
            return Err(ServiceError::invalid_token(format!(
                "Refresh token for user {} has expired",
                user.id
            )));
        }

        let access_token = self.jwt_utils.generate_token(&user.email, now)?;

        Ok(RefreshTokenResponse {
            token: access_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::user::models::CreateUserRequest;
    use crate::config::Config;

    async fn state_with_user(email: &str, password: &str) -> AppState {
        let state = AppState::new(Config::for_tests()).unwrap();
        state
            .user_service()
            .create_user(CreateUserRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await
            .unwrap();
        state
    }

    fn login_request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_issues_tokens_and_stores_refresh_token() {
        let state = state_with_user("a@b.com", "secret123").await;
        let service = AuthService::new(&state);
        let now = Utc::now();

        let response = service
            .login(login_request("a@b.com", "secret123"), now)
            .await
            .unwrap();

        assert_eq!(response.id, 1);
        assert_eq!(response.email, "a@b.com");
        assert_eq!(response.refresh_token.len(), 64);
        let claims = state.jwt_utils.validate_token(&response.token, now).unwrap();
        assert_eq!(claims.sub, "a@b.com");

        let stored = state.users.get_user_by_email("a@b.com").await.unwrap().unwrap();
        let stored_token = stored.refresh_token.unwrap();
        assert_eq!(stored_token.token, response.refresh_token);
        assert_eq!(stored_token.expires_at, now + Duration::days(60));
    }

    #[tokio::test]
    async fn test_login_failures_stay_distinct() {
        let state = state_with_user("a@b.com", "secret123").await;
        let service = AuthService::new(&state);

        let wrong = service.login(login_request("a@b.com", "wrong"), Utc::now()).await;
        assert!(matches!(wrong, Err(ServiceError::InvalidCredentials { .. })));

        let unknown = service
            .login(login_request("ghost@b.com", "secret123"), Utc::now())
            .await;
        assert!(matches!(unknown, Err(ServiceError::UnknownIdentity { .. })));

        let empty_password = service.login(login_request("a@b.com", ""), Utc::now()).await;
        assert!(matches!(empty_password, Err(ServiceError::InvalidCredentials { .. })));

        let empty_email = service.login(login_request("", "secret123"), Utc::now()).await;
        assert!(matches!(empty_email, Err(ServiceError::UnknownIdentity { .. })));

        // No refresh token is recorded for a failed attempt.
        let stored = state.users.get_user_by_email("a@b.com").await.unwrap().unwrap();
        assert!(stored.refresh_token.is_none());
    }

    #[tokio::test]
    async fn test_second_login_replaces_refresh_token() {
        let state = state_with_user("a@b.com", "secret123").await;
        let service = AuthService::new(&state);
        let now = Utc::now();

        let first = service.login(login_request("a@b.com", "secret123"), now).await.unwrap();
        let second = service.login(login_request("a@b.com", "secret123"), now).await.unwrap();
        assert_ne!(first.refresh_token, second.refresh_token);

        let stale = service.refresh_token(&first.refresh_token, now).await;
        assert!(matches!(stale, Err(ServiceError::InvalidToken { .. })));
        assert!(service.refresh_token(&second.refresh_token, now).await.is_ok());
    }

    #[tokio::test]
    async fn test_refresh_token_expiry() {
        let state = state_with_user("a@b.com", "secret123").await;
        let service = AuthService::new(&state);
        let now = Utc::now();
        let login = service.login(login_request("a@b.com", "secret123"), now).await.unwrap();

        let later = now + Duration::days(59);
        let refreshed = service.refresh_token(&login.refresh_token, later).await.unwrap();
        let claims = state.jwt_utils.validate_token(&refreshed.token, later).unwrap();
        assert_eq!(claims.sub, "a@b.com");

        let expired = service
            .refresh_token(&login.refresh_token, now + Duration::days(60))
            .await;
        assert!(matches!(expired, Err(ServiceError::InvalidToken { .. })));
    }
}
