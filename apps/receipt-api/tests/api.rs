//! # Integration Tests for receipt-api
//!
//! Drives the full router in-process: receipt submission, points lookup,
//! error bodies and the health probe.

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use receipt_api::{app, ApiConfig, AppState};

const TARGET: &str = include_str!("fixtures/target.json");
const CORNER_MARKET: &str = include_str!("fixtures/corner-market.json");
const MORNING: &str = include_str!("fixtures/morning-receipt.json");

/// Helper: build the app with default config and an empty store.
fn test_app() -> axum::Router {
    app(AppState::new(ApiConfig::default()))
}

/// Helper: read response body as JSON.
async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn post_receipt(app: &axum::Router, body: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/receipts/process")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn get_points(app: &axum::Router, id: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .uri(format!("/receipts/{id}/points"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Helper: submit a receipt that must be accepted and return its id.
async fn submit(app: &axum::Router, body: &str) -> String {
    let response = post_receipt(app, body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["id"].as_str().unwrap().to_string()
}

// -- Submission ----------------------------------------------------------------

#[tokio::test]
async fn test_process_returns_uuid_id() {
    let app = test_app();

    let id = submit(&app, TARGET).await;

    let parsed = uuid::Uuid::parse_str(&id).unwrap();
    assert_eq!(parsed.hyphenated().to_string(), id);
}

#[tokio::test]
async fn test_identical_receipts_get_distinct_ids() {
    let app = test_app();

    let first = submit(&app, MORNING).await;
    let second = submit(&app, MORNING).await;
    assert_ne!(first, second);

    let first_points = body_json(get_points(&app, &first).await).await;
    let second_points = body_json(get_points(&app, &second).await).await;
    assert_eq!(first_points, second_points);
}

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let app = test_app();

    let response = post_receipt(&app, "{ \"retailer\": ").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_missing_field_returns_400() {
    let app = test_app();
    let mut receipt: Value = serde_json::from_str(TARGET).unwrap();
    receipt.as_object_mut().unwrap().remove("purchaseTime");

    let response = post_receipt(&app, &receipt.to_string()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("purchaseTime"));
}

#[tokio::test]
async fn test_missing_content_type_returns_400() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/receipts/process")
                .body(Body::from(TARGET))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// -- Points --------------------------------------------------------------------

#[tokio::test]
async fn test_target_receipt_scores_28() {
    let app = test_app();
    let id = submit(&app, TARGET).await;

    let response = get_points(&app, &id).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({ "points": 28 }));
}

#[tokio::test]
async fn test_corner_market_receipt_scores_109() {
    let app = test_app();
    let id = submit(&app, CORNER_MARKET).await;

    let body = body_json(get_points(&app, &id).await).await;

    assert_eq!(body["points"], 109);
}

#[tokio::test]
async fn test_morning_receipt_scores_15() {
    let app = test_app();
    let id = submit(&app, MORNING).await;

    let body = body_json(get_points(&app, &id).await).await;

    assert_eq!(body["points"], 15);
}

#[tokio::test]
async fn test_unknown_id_returns_400() {
    let app = test_app();

    let response = get_points(&app, "does-not-exist").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "error": "Receipt not found" })
    );
}

#[tokio::test]
async fn test_unparseable_total_is_accepted_then_fails_scoring() {
    let app = test_app();
    let mut receipt: Value = serde_json::from_str(TARGET).unwrap();
    receipt["total"] = Value::from("thirty-five");

    let id = submit(&app, &receipt.to_string()).await;
    let response = get_points(&app, &id).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "total is not a valid amount: 'thirty-five'"
    );
}

#[tokio::test]
async fn test_unparseable_time_fails_scoring() {
    let app = test_app();
    let mut receipt: Value = serde_json::from_str(TARGET).unwrap();
    receipt["purchaseTime"] = Value::from("1:01 PM");

    let id = submit(&app, &receipt.to_string()).await;
    let response = get_points(&app, &id).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let message = body_json(response).await["error"].as_str().unwrap().to_string();
    assert!(message.starts_with("purchaseTime has invalid format"));
}

// -- Health --------------------------------------------------------------------

#[tokio::test]
async fn test_health_reports_receipt_count() {
    let app = test_app();
    submit(&app, TARGET).await;
    submit(&app, CORNER_MARKET).await;

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "status": "ok", "receipts": 2 })
    );
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let config = ApiConfig {
        max_body_bytes: 64,
        ..ApiConfig::default()
    };
    let app = app(AppState::new(config));

    let response = post_receipt(&app, TARGET).await;

    assert!(response.status().is_client_error());
}
