//! Router-level tests for asset routes
//!
//! These drive the HTTP surface without a live database: a lazy pool is
//! never connected because every request here is rejected before the first
//! query.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;

use crate::features::assets::assets_routes;

fn lazy_pool() -> PgPool {
    PgPoolOptions::new()
        .connect_lazy("postgresql://localhost/tds_test")
        .expect("lazy pool")
}

fn test_router() -> Router {
    assets_routes().with_state(lazy_pool())
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

#[tokio::test]
async fn import_with_empty_payload_is_bad_request() {
    let response = test_router()
        .oneshot(post_json(
            "/import",
            r#"{"ssrReference":"ssr-42","csv":"   "}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Import payload contains no rows");
}

#[tokio::test]
async fn import_with_blank_ssr_reference_is_bad_request() {
    let response = test_router()
        .oneshot(post_json(
            "/import",
            r#"{"ssrReference":"  ","csv":"nsn,asset_code,designation"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap_or_default().contains("SSR reference"));
}

#[tokio::test]
async fn create_with_missing_fields_is_validation_error() {
    let response = test_router()
        .oneshot(post_json(
            "/",
            r#"{"ssrReference":"ssr-42","nsn":"","assetCode":"AC1","designation":"Widget"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn list_with_unknown_status_is_validation_error() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/?status=scrapped")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_with_malformed_id_is_rejected() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/not-a-uuid")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
