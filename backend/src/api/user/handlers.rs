//! Handler functions for user registration and profile endpoints.
//!
//! These functions parse request data, call into `UserService`, and return
//! the public view of the user.

use crate::api::common::{json_payload, service_error_to_http};
use crate::api::user::models::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::app::AppState;
use crate::utils::jwt::Claims;
use axum::{
    extract::{Extension, Json, rejection::JsonRejection},
    http::StatusCode,
    response::{Json as ResponseJson, Response},
};

/// Registers a new user.
#[axum::debug_handler]
pub async fn create_user(
    Extension(state): Extension<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, ResponseJson<UserResponse>), Response> {
    let payload = json_payload(payload).map_err(service_error_to_http)?;

    match state.user_service().create_user(payload).await {
        Ok(user) => Ok((StatusCode::CREATED, ResponseJson(user.into()))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Updates the profile of the authenticated user.
#[axum::debug_handler]
pub async fn update_user(
    Extension(state): Extension<AppState>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<ResponseJson<UserResponse>, Response> {
    let payload = json_payload(payload).map_err(service_error_to_http)?;

    tracing::info!("Updating profile for user: {}", claims.subject());

    match state.user_service().update_user(claims.subject(), payload).await {
        Ok(user) => Ok(ResponseJson(user.into())),
        Err(error) => Err(service_error_to_http(error)),
    }
}
