//! Middleware for protecting authenticated routes.
//!
//! This module parses bearer credentials from the `Authorization` header,
//! validates access tokens, and makes the verified claims available to handlers.

use crate::api::common::service_error_to_http;
use crate::app::AppState;
use crate::errors::{ServiceError, ServiceResult};
use crate::utils::jwt::{Claims, JwtUtils};
use axum::{
    extract::{Extension, Request},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Utc};

const BEARER_SCHEME: &str = "Bearer";

/// Splits an `Authorization` value of the form `Bearer <token>` and returns the token.
///
/// The scheme is matched case-insensitively. Anything other than exactly a
/// scheme and one token is rejected.
pub fn extract_bearer(header_value: &str) -> ServiceResult<&str> {
    let header_value = header_value.trim();
    if header_value.is_empty() {
        return Err(ServiceError::malformed_header("empty authorization header"));
    }

    let (scheme, token) = header_value
        .split_once(' ')
        .ok_or_else(|| ServiceError::malformed_header("expected '<scheme> <token>'"))?;

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return Err(ServiceError::malformed_header(format!(
            "unsupported scheme '{}'",
            scheme
        )));
    }

    let token = token.trim();
    if token.is_empty() || token.contains(char::is_whitespace) {
        return Err(ServiceError::malformed_header("expected exactly one token"));
    }

    Ok(token)
}

/// Reads the bearer token from request headers.
pub fn bearer_token(headers: &HeaderMap) -> ServiceResult<&str> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| ServiceError::malformed_header("no authorization header provided"))?
        .to_str()
        .map_err(|_| ServiceError::malformed_header("authorization header is not valid ASCII"))?;

    extract_bearer(value)
}

/// Verifies the access token carried by `headers` and returns its claims.
pub fn authenticate(
    jwt_utils: &JwtUtils,
    headers: &HeaderMap,
    now: DateTime<Utc>,
) -> ServiceResult<Claims> {
    let token = bearer_token(headers)?;
    jwt_utils.validate_token(token, now)
}

/// JWT authentication middleware
pub async fn jwt_auth(
    Extension(state): Extension<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let claims = authenticate(&state.jwt_utils, request.headers(), Utc::now())
        .map_err(service_error_to_http)?;

    // Add claims to request extensions for use in handlers
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
