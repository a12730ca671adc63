//! API Handlers
//!
//! HTTP request handlers for the CSV download endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tokio::sync::Mutex;

use crate::cache::{ExportCache, SharedCache};
use crate::datasets::Dataset;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Mutex-guarded export cache, also written by the refresh task
    pub cache: SharedCache,
}

impl AppState {
    /// Creates a new AppState around the given cache.
    pub fn new(cache: ExportCache) -> Self {
        Self {
            cache: Arc::new(Mutex::new(cache)),
        }
    }
}

/// Handler for GET /licenses.csv
pub async fn licenses_handler(State(state): State<AppState>) -> Response {
    serve_dataset(&state, Dataset::Licenses).await
}

/// Handler for GET /backupsets.csv
pub async fn backupsets_handler(State(state): State<AppState>) -> Response {
    serve_dataset(&state, Dataset::Backupsets).await
}

/// Handler for GET /groups.csv
pub async fn groups_handler(State(state): State<AppState>) -> Response {
    serve_dataset(&state, Dataset::Groups).await
}

/// Fallback handler for any path outside the three export routes.
pub async fn not_found_handler() -> Response {
    (StatusCode::NOT_FOUND, "Not found").into_response()
}

/// Serves the cached CSV of one dataset as an attachment download.
///
/// Returns 503 until the dataset has been populated by the refresh task.
async fn serve_dataset(state: &AppState, dataset: Dataset) -> Response {
    let cache = state.cache.lock().await;

    match cache.get(dataset) {
        Some(body) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv"),
                (header::CONTENT_DISPOSITION, dataset.content_disposition()),
            ],
            body.to_owned(),
        )
            .into_response(),
        None => (StatusCode::SERVICE_UNAVAILABLE, "Service unavailable").into_response(),
    }
}
