//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use call_cache::{api::create_router, AppState};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> Router {
    create_router(AppState::in_memory().unwrap())
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn store(app: &Router, body: &str) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/store")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    json["key"].as_str().unwrap().to_string()
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

// == STORE Endpoint Tests ==

#[tokio::test]
async fn test_store_endpoint_success() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/store")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"value":"test_value"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    let key = json["key"].as_str().unwrap();
    assert_eq!(key.len(), 36);
    assert!(json["message"].as_str().unwrap().contains(key));
}

#[tokio::test]
async fn test_store_endpoint_invalid_json() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/store")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"value":"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

// == GET Endpoint Tests ==

#[tokio::test]
async fn test_get_endpoint_text() {
    let app = create_test_app();
    let key = store(&app, r#"{"value":"bar"}"#).await;

    let (status, json) = get(&app, &format!("/get/{}", key)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["key"], key);
    assert_eq!(json["value"], "bar");
}

#[tokio::test]
async fn test_get_endpoint_integer() {
    let app = create_test_app();
    let key = store(&app, r#"{"value":123}"#).await;

    let (status, json) = get(&app, &format!("/get/{}?decode=integer", key)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["value"], 123);
}

#[tokio::test]
async fn test_get_endpoint_float() {
    let app = create_test_app();
    let key = store(&app, r#"{"value":2.5}"#).await;

    let (status, json) = get(&app, &format!("/get/{}?decode=float", key)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["value"], 2.5);
}

#[tokio::test]
async fn test_get_endpoint_identity_bytes() {
    let app = create_test_app();
    let key = store(&app, r#"{"value":"hi"}"#).await;

    let (status, json) = get(&app, &format!("/get/{}?decode=identity", key)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["value"], serde_json::json!([104, 105]));
}

#[tokio::test]
async fn test_get_endpoint_not_found() {
    let app = create_test_app();

    let (status, json) = get(&app, "/get/nonexistent").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn test_get_endpoint_decode_mismatch() {
    let app = create_test_app();
    let key = store(&app, r#"{"value":"abc"}"#).await;

    let (status, json) = get(&app, &format!("/get/{}?decode=integer", key)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["error"].as_str().unwrap().contains("abc"));
}

// == HISTORY Endpoint Tests ==

#[tokio::test]
async fn test_history_endpoint_empty() {
    let app = create_test_app();

    let (status, json) = get(&app, "/history").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Cache.store");
    assert_eq!(json["count"], 0);
    assert_eq!(json["calls"].as_array().unwrap().len(), 0);
    assert_eq!(json["report"], "Cache.store was called 0 times:");
}

#[tokio::test]
async fn test_history_endpoint_after_stores() {
    let app = create_test_app();
    let first = store(&app, r#"{"value":"foo"}"#).await;
    let second = store(&app, r#"{"value":42}"#).await;

    let (status, json) = get(&app, "/history").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 2);
    assert_eq!(json["calls"][0]["input"], "foo");
    assert_eq!(json["calls"][0]["output"], first);
    assert_eq!(json["calls"][1]["input"], "42");
    assert_eq!(json["calls"][1]["output"], second);
}

// == STATS Endpoint Tests ==

#[tokio::test]
async fn test_stats_endpoint() {
    let app = create_test_app();
    store(&app, r#"{"value":"a"}"#).await;
    store(&app, r#"{"value":"b"}"#).await;
    let key = store(&app, r#"{"value":"c"}"#).await;

    // reads are not instrumented
    get(&app, &format!("/get/{}", key)).await;

    let (status, json) = get(&app, "/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["store_calls"], 3);
    assert_eq!(json["value_keys"], 3);
    assert_eq!(json["total_keys"], 6);
}

// == HEALTH Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let (status, json) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json.get("timestamp").is_some());
}
