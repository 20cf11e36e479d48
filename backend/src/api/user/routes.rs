//! Defines the HTTP routes for user registration and profile updates.

use super::handlers::{create_user, update_user};
use crate::auth::middleware::jwt_auth;
use axum::{
    Router, middleware,
    routing::{post, put},
};

pub fn user_router() -> Router {
    Router::new().route(
        "/users",
        post(create_user).merge(put(update_user).layer(middleware::from_fn(jwt_auth))),
    )
}
