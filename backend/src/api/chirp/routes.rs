use super::handlers::validate_chirp;
use axum::{Router, routing::post};

pub fn chirp_router() -> Router {
    Router::new().route("/validate_chirp", post(validate_chirp))
}
