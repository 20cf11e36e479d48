//! Application state and router assembly.
//!
//! `AppState` is built once at startup and handed to every handler through an
//! `Extension` layer. All of its parts are shared read-only except the
//! credential store, which synchronizes internally, and the hit counter, which
//! is atomic.

use crate::api;
use crate::api::admin::handlers::reset_metrics;
use crate::api::admin::middleware::count_file_server_hits;
use crate::auth;
use crate::config::Config;
use crate::errors::ServiceResult;
use crate::repositories::user_repository::{InMemoryUserRepository, UserRepository};
use crate::services::user_service::UserService;
use crate::utils::jwt::JwtUtils;
use axum::{Extension, Router, middleware, routing::get};
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use tower_http::{services::ServeDir, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub users: Arc<dyn UserRepository>,
    pub jwt_utils: Arc<JwtUtils>,
    pub file_server_hits: Arc<AtomicU64>,
}

impl AppState {
    /// Builds the state around an empty in-memory credential store.
    pub fn new(config: Config) -> ServiceResult<Self> {
        let jwt_utils = JwtUtils::new(&config.jwt_secret, config.jwt_expires_in_seconds)?;

        Ok(AppState {
            config: Arc::new(config),
            users: Arc::new(InMemoryUserRepository::new()),
            jwt_utils: Arc::new(jwt_utils),
            file_server_hits: Arc::new(AtomicU64::new(0)),
        })
    }

    pub fn user_service(&self) -> UserService<'_> {
        UserService::new(self.users.as_ref(), self.config.password_hash_cost)
    }
}

/// Builds the full application router.
pub fn build_router(state: AppState) -> Router {
    let file_server = Router::new()
        .fallback_service(ServeDir::new(&state.config.filesystem_root))
        .layer(middleware::from_fn(count_file_server_hits));

    let api_routes = Router::new()
        .route("/healthz", get(healthz))
        .route("/reset", get(reset_metrics))
        .merge(api::user::routes::user_router())
        .merge(auth::routes::auth_router())
        .merge(api::chirp::routes::chirp_router());

    Router::new()
        .nest("/api", api_routes)
        .nest("/admin", api::admin::routes::admin_router())
        .nest_service("/app", file_server)
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

async fn healthz() -> &'static str {
    "OK"
}
