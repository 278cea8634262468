pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::extraction::handlers;
use crate::state::AppState;

/// Headroom for multipart framing on top of the file size limit.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        // Extraction API
        .route(
            "/api/v1/resumes/extract",
            post(handlers::handle_extract_upload),
        )
        .route(
            "/api/v1/resumes/extract-text",
            post(handlers::handle_extract_text),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
