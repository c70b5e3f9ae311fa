//! Route-level tests driving the full router, middleware included.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use signalhook_config::ServerConfig;
use signalhook_server::create_router;
use tower::ServiceExt;

fn app() -> Router {
    create_router(&ServerConfig::default())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("failed to make request");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let body = serde_json::from_slice(&bytes).expect("response should be valid JSON");
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

fn eurusd_signal() -> Value {
    json!({
        "pair": "EURUSD",
        "direction": "buy",
        "risk_percent": 1.5,
        "entry": 1.085,
        "sl": 1.08,
        "tp1": 1.09,
        "tp2": 1.095,
        "prob_score": 0.72,
        "iof_score": 0.64
    })
}

#[tokio::test]
async fn root_returns_greeting() {
    let (status, body) = send(app(), get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "greeting": "Hello, World!", "message": "Forex Webhook Active!" }));
}

#[tokio::test]
async fn signal_webhook_echoes_valid_signal() {
    let signal = eurusd_signal();
    let (status, body) = send(app(), post("/webhook", signal.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Signal processed for EURUSD");
    assert_eq!(body["data"], signal);

    let timestamp = body["timestamp"].as_str().expect("timestamp should be a string");
    assert!(
        chrono::DateTime::parse_from_rfc3339(timestamp).is_ok(),
        "timestamp should be ISO-8601, got: {}",
        timestamp
    );
}

#[tokio::test]
async fn signal_webhook_preserves_absent_tp2_as_null() {
    let mut signal = eurusd_signal();
    signal.as_object_mut().unwrap().remove("tp2");

    let (status, body) = send(app(), post("/webhook", signal.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["tp2"], Value::Null);
    assert_eq!(body["data"]["entry"], json!(1.085));
}

#[tokio::test]
async fn signal_webhook_rejects_missing_field_with_422() {
    let mut signal = eurusd_signal();
    signal.as_object_mut().unwrap().remove("entry");

    let (status, body) = send(app(), post("/webhook", signal.to_string())).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["type"], "missing");
    assert_eq!(body["detail"][0]["loc"], json!(["body", "entry"]));
}

#[tokio::test]
async fn signal_webhook_rejects_wrong_type_with_422() {
    let mut signal = eurusd_signal();
    signal["risk_percent"] = json!("high");

    let (status, body) = send(app(), post("/webhook", signal.to_string())).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_array());
}

#[tokio::test]
async fn signal_webhook_reports_every_missing_field() {
    let (status, body) = send(app(), post("/webhook", "{}")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let detail = body["detail"].as_array().expect("detail should be an array");
    assert_eq!(detail.len(), 8);
    assert!(detail.iter().all(|issue| issue["type"] == "missing"));
    assert_eq!(detail[0]["loc"], json!(["body", "pair"]));
    assert_eq!(detail[7]["loc"], json!(["body", "iof_score"]));
}

#[tokio::test]
async fn signal_webhook_locates_mistyped_field() {
    let mut signal = eurusd_signal();
    signal["sl"] = json!("x");

    let (status, body) = send(app(), post("/webhook", signal.to_string())).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["detail"][0]["loc"], json!(["body", "sl"]));
    assert_eq!(body["detail"][0]["type"], "float_parsing");
}

#[tokio::test]
async fn signal_webhook_accepts_numeric_strings() {
    let mut signal = eurusd_signal();
    signal["risk_percent"] = json!("1.5");

    let (status, body) = send(app(), post("/webhook", signal.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["risk_percent"], json!(1.5));
}

#[tokio::test]
async fn signal_webhook_rejects_malformed_json_with_422() {
    let (status, body) = send(app(), post("/webhook", "{\"pair\":")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["type"], "json_invalid");
}

#[tokio::test]
async fn tradingview_echoes_payload() {
    let (status, body) = send(app(), post("/webhook/tradingview", r#"{"ticker":"EURUSD"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "received", "data": { "ticker": "EURUSD" } }));
}

#[tokio::test]
async fn tradingview_treats_empty_body_as_empty_object() {
    let (status, body) = send(app(), post("/webhook/tradingview", Body::empty())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "received", "data": {} }));
}

#[tokio::test]
async fn tradingview_accepts_non_object_json() {
    let (status, body) = send(app(), post("/webhook/tradingview", "[1,2,3]")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([1, 2, 3]));
}

#[tokio::test]
async fn tradingview_rejects_invalid_json_with_400() {
    let (status, body) = send(app(), post("/webhook/tradingview", "not-json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let detail = body["detail"].as_str().expect("detail should be a string");
    assert!(!detail.is_empty());
}

#[tokio::test]
async fn health_lists_literal_endpoints() {
    let (status, body) = send(app(), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "Forex Hybrid Webhook");
    assert_eq!(body["endpoints"], json!(["/", "/webhook", "/webhook/tradingview", "/health"]));
}

#[tokio::test]
async fn status_reports_default_webhook_url() {
    let (status, body) = send(app(), get("/status")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "service": "Forex Trading Webhook",
            "version": "1.0",
            "ready": true,
            "webhook_url": "https://fastapi-production-abac.up.railway.app/webhook"
        })
    );
}

#[tokio::test]
async fn status_reports_configured_webhook_url() {
    let config = ServerConfig {
        webhook_url: "https://hooks.example.com/webhook".into(),
        ..ServerConfig::default()
    };

    let (_, body) = send(create_router(&config), get("/status")).await;

    assert_eq!(body["webhook_url"], "https://hooks.example.com/webhook");
}

#[tokio::test]
async fn static_payloads_are_unaffected_by_prior_requests() {
    let app = app();

    let (_, before) = send(app.clone(), get("/status")).await;
    let _ = send(app.clone(), post("/webhook", eurusd_signal().to_string())).await;
    let _ = send(app.clone(), post("/webhook/tradingview", r#"{"ticker":"GBPUSD"}"#)).await;
    let (_, after) = send(app.clone(), get("/status")).await;
    let (_, root) = send(app, get("/")).await;

    assert_eq!(before, after);
    assert_eq!(root["greeting"], "Hello, World!");
}
