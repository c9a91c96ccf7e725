//! Integration tests for the catalog-api route table.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

fn setup() -> axum::Router {
    common::layers::with_observability(catalog_api::create_app())
}

async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
    let response = setup()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_root() {
    let (status, json) = get_json("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({ "message": "Catalog API is running" }));
}

#[tokio::test]
async fn test_healthz() {
    let (status, json) = get_json("/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!({ "status": "ok", "service": "catalog-api" })
    );
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let response = setup()
        .oneshot(
            Request::builder()
                .uri("/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_default_port() {
    assert_eq!(catalog_api::DEFAULT_PORT, 4101);
}
