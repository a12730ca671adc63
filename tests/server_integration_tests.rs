//! Integration Tests for the CSV Download Server
//!
//! Tests the full request/response cycle through the router, including the
//! cold-cache 503 path and the transform-then-serve flow.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use beemo_exporter::{api::create_router, cache::ExportCache, datasets::Dataset, AppState};
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> (AppState, Router) {
    let state = AppState::new(ExportCache::new());
    let app = create_router(state.clone());
    (state, app)
}

async fn get(app: Router, path: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// == Cold Cache Tests ==

#[tokio::test]
async fn test_all_datasets_return_503_before_first_refresh() {
    let (_state, app) = create_test_app();

    for path in ["/licenses.csv", "/backupsets.csv", "/groups.csv"] {
        let response = get(app.clone(), path).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = body_to_string(response.into_body()).await;
        assert_eq!(body, "Service unavailable");
    }
}

// == Unknown Path Tests ==

#[tokio::test]
async fn test_unknown_paths_return_404() {
    let (_state, app) = create_test_app();

    for path in ["/", "/licenses", "/licenses.csv/extra", "/stats"] {
        let response = get(app.clone(), path).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

// == Warm Cache Tests ==

#[tokio::test]
async fn test_warm_dataset_serves_csv_attachment() {
    let (state, app) = create_test_app();

    let csv_text = "Client,Licence\nAcme,Pro\n".to_string();
    state
        .cache
        .lock()
        .await
        .insert(Dataset::Licenses, csv_text.clone());

    let response = get(app, "/licenses.csv").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/csv"
    );
    assert_eq!(
        response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=licenses.csv"
    );

    let content_length: usize = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .unwrap()
        .to_str()
        .unwrap()
        .parse()
        .unwrap();

    let body = body_to_string(response.into_body()).await;
    assert_eq!(body, csv_text);
    assert_eq!(content_length, body.len());
}

#[tokio::test]
async fn test_partially_refreshed_cache_is_observable() {
    let (state, app) = create_test_app();

    // Only licenses has landed so far
    state
        .cache
        .lock()
        .await
        .insert(Dataset::Licenses, "Client\nAcme\n".to_string());

    let warm = get(app.clone(), "/licenses.csv").await;
    assert_eq!(warm.status(), StatusCode::OK);

    let cold = get(app, "/groups.csv").await;
    assert_eq!(cold.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_refresh_replaces_served_payload() {
    let (state, app) = create_test_app();

    state
        .cache
        .lock()
        .await
        .insert(Dataset::Groups, "Groupe\nParis\n".to_string());
    state
        .cache
        .lock()
        .await
        .insert(Dataset::Groups, "Groupe\nLyon\n".to_string());

    let response = get(app, "/groups.csv").await;
    let body = body_to_string(response.into_body()).await;
    assert_eq!(body, "Groupe\nLyon\n");
}

// == Transform-Then-Serve Tests ==

#[tokio::test]
async fn test_transformed_backupsets_never_serve_ok_rows() {
    let (state, app) = create_test_app();

    let export = "\
Customer;Backup set;Last backup;Size;Status
Acme;Mail;2024-05-01 02:00;12 Go;Ok
Acme;Files;2024-04-28 02:00;340 Go;Late
";
    let csv_text = beemo_exporter::datasets::transform(Dataset::Backupsets, export).unwrap();
    state
        .cache
        .lock()
        .await
        .insert(Dataset::Backupsets, csv_text);

    let response = get(app, "/backupsets.csv").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_to_string(response.into_body()).await;
    assert!(!body.lines().any(|line| line.ends_with(",Ok")));
    assert!(body.contains("Late"));
}

#[tokio::test]
async fn test_transformed_licenses_serve_derived_ratio() {
    let (state, app) = create_test_app();

    let export = "\
Customer;License;Quota;Externalized storage;Usage;Status
Acme;Pro;200;50;12,5%;95%
";
    let csv_text = beemo_exporter::datasets::transform(Dataset::Licenses, export).unwrap();
    state.cache.lock().await.insert(Dataset::Licenses, csv_text);

    let response = get(app, "/licenses.csv").await;
    let body = body_to_string(response.into_body()).await;

    // used=50, quota=200 -> Ratio=25.0; decimal-comma usage becomes 12.5
    assert!(body.contains("Acme,Pro,200,50,12.5,95,25.0"));
}
