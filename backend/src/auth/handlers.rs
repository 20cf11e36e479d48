//! Handler functions for authentication-related API endpoints.
//!
//! These functions process incoming HTTP requests for login and token refresh,
//! parse request data, and delegate to `auth::service` for the business logic.

use crate::api::common::{json_payload, service_error_to_http};
use crate::app::AppState;
use crate::auth::middleware::bearer_token;
use crate::auth::models::*;
use crate::auth::service::AuthService;
use axum::{
    extract::{Extension, Json, rejection::JsonRejection},
    http::HeaderMap,
    response::{Json as ResponseJson, Response},
};
use chrono::Utc;

/// Handle user login request
#[axum::debug_handler]
pub async fn login(
    Extension(state): Extension<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<ResponseJson<LoginResponse>, Response> {
    let payload = json_payload(payload).map_err(service_error_to_http)?;
    let auth_service = AuthService::new(&state);

    match auth_service.login(payload, Utc::now()).await {
        Ok(response) => Ok(ResponseJson(response)),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Handle token refresh request; the refresh token travels as a bearer credential
#[axum::debug_handler]
pub async fn refresh_token(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
) -> Result<ResponseJson<RefreshTokenResponse>, Response> {
    let refresh_token = bearer_token(&headers).map_err(service_error_to_http)?;
    let auth_service = AuthService::new(&state);

    match auth_service.refresh_token(refresh_token, Utc::now()).await {
        Ok(response) => Ok(ResponseJson(response)),
        Err(error) => Err(service_error_to_http(error)),
    }
}
