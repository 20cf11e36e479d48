use super::handlers::metrics;
use axum::{Router, routing::get};

pub fn admin_router() -> Router {
    Router::new().route("/metrics", get(metrics))
}
