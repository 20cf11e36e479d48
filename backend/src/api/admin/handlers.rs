//! Handler functions for the admin page and hit counter reset.

use crate::app::AppState;
use axum::{extract::Extension, response::Html};
use std::sync::atomic::Ordering;

/// Renders the admin page with the current file server hit count.
pub async fn metrics(Extension(state): Extension<AppState>) -> Html<String> {
    let hits = state.file_server_hits.load(Ordering::Relaxed);

    Html(format!(
        r#"<html>
<body>
    <h1>Welcome, Chirpy Admin</h1>
    <p>Chirpy has been visited {} times!</p>
</body>
</html>
"#,
        hits
    ))
}

/// Resets the file server hit count.
pub async fn reset_metrics(Extension(state): Extension<AppState>) -> &'static str {
    state.file_server_hits.store(0, Ordering::Relaxed);
    tracing::info!("File server hit counter reset");
    "Reset hits to 0"
}
