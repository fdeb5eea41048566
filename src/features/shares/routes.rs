use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::features::shares::handlers::{download_share, get_share, upload_share};
use crate::features::shares::services::ShareService;

/// Create routes for the shares feature
pub fn routes(service: Arc<ShareService>, max_file_size: usize) -> Router {
    Router::new()
        .route(
            "/api/upload",
            // Allow body size up to the upload cap + buffer for multipart overhead
            post(upload_share).layer(DefaultBodyLimit::max(max_file_size + 1024 * 1024)),
        )
        .route("/api/file/{id}", get(get_share))
        .route("/api/download/{id}", get(download_share))
        .with_state(service)
}
