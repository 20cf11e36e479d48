//! Error handling utilities for API responses.
//!
//! Provides the standard error body and the single conversion from
//! service-layer errors to HTTP responses.
//!
//! # Response Format
//! Errors return a minimal JSON body `{"error": "<message>"}`. Authentication
//! failures share one generic message, and internal failures never expose
//! their detail; both are logged instead.
//!
//! # Error Handling Flow
//! 1. Service layer returns domain-specific `ServiceError`
//! 2. `service_error_to_http` converts to exactly one HTTP status
//! 3. Malformed JSON bodies are turned into validation errors by `json_payload`

use crate::errors::{ServiceError, ServiceResult};
use axum::{
    extract::{Json, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Standard error body for failed requests
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Converts ServiceError to appropriate HTTP response with standard format
pub fn service_error_to_http(error: ServiceError) -> Response {
    let (status, message) = match error {
        ServiceError::Validation { message } => (StatusCode::BAD_REQUEST, message),
        ServiceError::NotFound { entity, identifier } => (
            StatusCode::NOT_FOUND,
            format!("{} '{}' not found", entity, identifier),
        ),
        ServiceError::AlreadyExists { entity, identifier } => (
            StatusCode::CONFLICT,
            format!("{} with email: {} already exists", entity, identifier),
        ),
        ServiceError::InvalidCredentials { email } => {
            tracing::info!("Rejected login for {}: wrong password", email);
            (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string())
        }
        ServiceError::UnknownIdentity { email } => {
            tracing::info!("Rejected login: no user found with the email {}", email);
            return StatusCode::NO_CONTENT.into_response();
        }
        ServiceError::MalformedHeader { message } => {
            tracing::debug!("Unauthenticated request, malformed header: {}", message);
            (StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
        }
        ServiceError::InvalidToken { message } => {
            tracing::warn!("Unauthenticated request, invalid token: {}", message);
            (StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
        }
        ServiceError::InternalError { message } => {
            tracing::error!("Internal error: {}", message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    };

    (status, Json(ErrorResponse::new(message))).into_response()
}

/// Unwraps a JSON body, reporting a malformed one as a validation error.
pub fn json_payload<T>(payload: Result<Json<T>, JsonRejection>) -> ServiceResult<T> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ServiceError::validation(rejection.body_text()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let cases = [
            (ServiceError::validation("bad"), StatusCode::BAD_REQUEST),
            (ServiceError::not_found("User", "x"), StatusCode::NOT_FOUND),
            (ServiceError::already_exists("User", "a@b.com"), StatusCode::CONFLICT),
            (ServiceError::invalid_credentials("a@b.com"), StatusCode::UNAUTHORIZED),
            (ServiceError::unknown_identity("a@b.com"), StatusCode::NO_CONTENT),
            (ServiceError::malformed_header("missing"), StatusCode::UNAUTHORIZED),
            (ServiceError::invalid_token("expired"), StatusCode::UNAUTHORIZED),
            (ServiceError::internal_error("boom"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(service_error_to_http(error).status(), expected);
        }
    }

    #[tokio::test]
    async fn test_auth_failures_share_one_body() {
        let header = body_json(service_error_to_http(ServiceError::malformed_header("missing"))).await;
        let token = body_json(service_error_to_http(ServiceError::invalid_token("expired"))).await;

        assert_eq!(header, token);
        assert_eq!(header["error"], "Unauthorized");
    }

    #[tokio::test]
    async fn test_internal_detail_is_hidden() {
        let response = service_error_to_http(ServiceError::internal_error("secret stack trace"));
        let body = body_json(response).await;

        assert_eq!(body["error"], "Internal server error");
    }
}
