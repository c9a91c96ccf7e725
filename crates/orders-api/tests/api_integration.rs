//! Integration tests for the orders-api route table.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

fn setup() -> axum::Router {
    common::layers::with_observability(orders_api::create_app())
}

#[tokio::test]
async fn test_root() {
    let app = setup();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, serde_json::json!({ "message": "orders-api running" }));
}

#[tokio::test]
async fn test_healthz() {
    let app = setup();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "orders-api");
    assert_eq!(json.as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn test_unknown_paths_are_not_found() {
    let app = setup();

    for uri in ["/nonexistent", "/health", "/healthz/", "/orders"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[tokio::test]
async fn test_healthz_is_idempotent() {
    let app = setup();

    let mut first = None;
    for _ in 0..3 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/healthz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        match &first {
            None => first = Some(body),
            Some(expected) => assert_eq!(&body, expected),
        }
    }
}
