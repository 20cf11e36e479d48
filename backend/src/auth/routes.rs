//! Defines the HTTP routes specifically for authentication.
//!
//! These routes handle login and token refreshing and are merged into the
//! `/api` router.

use crate::auth::handlers::*;
use axum::{Router, routing::post};

/// Creates the authentication router with all auth-related routes
pub fn auth_router() -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/refresh", post(refresh_token))
}
