//! API Routes
//!
//! Configures the Axum router with the three export download endpoints.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{
    backupsets_handler, groups_handler, licenses_handler, not_found_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /licenses.csv` - Download the latest licenses export
/// - `GET /backupsets.csv` - Download the latest backup sets export
/// - `GET /groups.csv` - Download the latest groups export
///
/// Routes are exact matches; everything else falls through to a plain 404.
///
/// # Middleware
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/licenses.csv", get(licenses_handler))
        .route("/backupsets.csv", get(backupsets_handler))
        .route("/groups.csv", get(groups_handler))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ExportCache;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let state = AppState::new(ExportCache::new());
        create_router(state)
    }

    #[tokio::test]
    async fn test_export_routes_exist() {
        for path in ["/licenses.csv", "/backupsets.csv", "/groups.csv"] {
            let app = create_test_app();

            let response = app
                .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
                .await
                .unwrap();

            // Cold cache: the route matches but no data is available yet
            assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        }
    }

    #[tokio::test]
    async fn test_unknown_path_returns_404() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/licenses")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_root_path_returns_404() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
