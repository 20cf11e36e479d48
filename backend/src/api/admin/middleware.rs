//! Middleware for the static file server.

use crate::app::AppState;
use axum::{
    extract::{Extension, Request},
    middleware::Next,
    response::Response,
};
use std::sync::atomic::Ordering;

/// Counts every request that reaches the static file server.
pub async fn count_file_server_hits(
    Extension(state): Extension<AppState>,
    request: Request,
    next: Next,
) -> Response {
    state.file_server_hits.fetch_add(1, Ordering::Relaxed);
    next.run(request).await
}
