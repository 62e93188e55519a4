use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    extract::Path,
    http::{header, Method, Request},
    routing::{get, post},
    Json, Router,
};
use paydeck_server::{api::app_router, build_state, config::Config};
use serde_json::{json, Value};
use tower::ServiceExt;

// ============================================================================
// Stub platform API
// ============================================================================

async fn stub_profile(Path(_id): Path<String>) -> Json<Value> {
    Json(json!({
        "id": "AH3227C223222B5GJTDDB8TLW",
        "legalEntityId": "LE001",
        "description": "Luna Bistro",
        "legalName": "Luna Bistro BV",
        "countryCode": "NL",
        "status": "Suspended",
        "verificationStatus": "valid",
        "capabilities": {
            "receivePayments": {
                "allowed": true,
                "requested": true,
                "verificationStatus": "valid"
            }
        }
    }))
}

async fn stub_instruments(Path(_id): Path<String>) -> Json<Value> {
    Json(json!({
        "paymentInstruments": [
            {
                "id": "acc_001",
                "status": "Active",
                "description": "Bank account",
                "currency": "EUR",
                "bankAccount": {"iban": "NL91 ABNA 0417 1643 00", "type": "iban"}
            },
            {
                "id": "card_013",
                "status": "Active",
                "description": "Business card",
                "balanceAccountId": "acc_001",
                "card": {
                    "brand": "mc",
                    "number": "**** 3941",
                    "cardholderName": "Sofia Nguyen",
                    "expiration": {"month": "08", "year": "2027"}
                }
            }
        ]
    }))
}

async fn stub_transactions(Path(_id): Path<String>) -> Json<Value> {
    Json(json!({
        "transactions": [
            {
                "id": "tx_9001",
                "createdAt": "2026-07-14 09:12",
                "amountMinorUnits": 12995,
                "currency": "EUR",
                "type": "payment",
                "status": "booked",
                "reference": "order-1883"
            },
            {
                "id": "tx_9002",
                "createdAt": "2026-07-15 16:40",
                "amountMinorUnits": -2999,
                "currency": "EUR",
                "type": "refund",
                "status": "pending"
            }
        ]
    }))
}

async fn stub_activate(Path(_id): Path<String>) -> Json<Value> {
    Json(json!({"status": "Active"}))
}

async fn stub_suspend(Path(_id): Path<String>) -> Json<Value> {
    Json(json!({"status": "Suspended"}))
}

/// Serve a canned platform API on an ephemeral port and return its base URL.
async fn spawn_stub_platform() -> String {
    let router = Router::new()
        .route("/api/accountHolders/{id}", get(stub_profile))
        .route(
            "/api/accountHolders/{id}/payment-instruments",
            get(stub_instruments),
        )
        .route("/api/accountHolders/{id}/transactions", get(stub_transactions))
        .route("/api/accountHolders/{id}/activate", post(stub_activate))
        .route("/api/accountHolders/{id}/suspend", post(stub_suspend));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/api", addr)
}

// ============================================================================
// Helpers
// ============================================================================

fn test_config(platform_api_url: String) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".to_string(),
        platform_api_url,
        static_dir: "./dist".to_string(),
    }
}

async fn build_test_router(platform_api_url: String) -> axum::Router {
    let config = test_config(platform_api_url);
    let state = build_state(&config).await.unwrap();
    app_router(state)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    }
}

async fn get_model(app: &axum::Router, session_id: &str) -> (u16, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/v1/detail/sessions/{session_id}/model"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status().as_u16();
    (status, read_json(response).await)
}

/// Poll the model until all three sources have settled.
async fn settle_model(app: &axum::Router, session_id: &str) -> Value {
    for _ in 0..100 {
        let (status, model) = get_model(app, session_id).await;
        assert_eq!(status, 200);
        let settled = !model["profile"]["loading"].as_bool().unwrap()
            && !model["instruments"]["loading"].as_bool().unwrap()
            && !model["transactions"]["loading"].as_bool().unwrap();
        if settled {
            return model;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("detail sources never settled");
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn detail_session_lifecycle() {
    let platform_url = spawn_stub_platform().await;
    let app = build_test_router(platform_url).await;

    // Create a session for LE001
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/v1/detail/sessions",
            json!({"entityId": "LE001"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let created = read_json(response).await;
    let session_id = created["sessionId"].as_str().unwrap().to_string();

    // All three sources resolve from the stub platform
    let model = settle_model(&app, &session_id).await;
    assert_eq!(model["fields"]["id"], "LE001");
    assert_eq!(model["fields"]["name"], "Luna Bistro");
    assert_eq!(model["fields"]["status"], "Suspended");
    assert_eq!(model["instruments"]["items"].as_array().unwrap().len(), 2);
    assert_eq!(model["transactions"]["items"].as_array().unwrap().len(), 2);
    assert_eq!(model["capabilities"][0]["label"], "Receive Payments");

    // Overview panel partitions the instrument table
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/v1/detail/sessions/{session_id}/panel"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let panel = read_json(response).await;
    assert_eq!(panel["panel"], "overview");
    assert_eq!(panel["instruments"]["bankAccounts"].as_array().unwrap().len(), 1);
    assert_eq!(panel["instruments"]["cards"].as_array().unwrap().len(), 1);
    assert_eq!(
        panel["instruments"]["cards"][0]["actions"],
        json!(["review", "disable"])
    );

    // Switch to the transactions tab and read its projection
    let response = app
        .clone()
        .oneshot(post_json(
            &format!("/api/v1/detail/sessions/{session_id}/tab"),
            json!({"index": 1}),
        ))
        .await
        .unwrap();
    assert_eq!(read_json(response).await, json!("transactions"));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/v1/detail/sessions/{session_id}/panel"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let panel = read_json(response).await;
    assert_eq!(panel["panel"], "transactions");
    assert_eq!(panel["rows"][0]["amount"], "129.95 EUR");
    assert_eq!(panel["rows"][0]["tone"], "success");
    assert_eq!(panel["rows"][1]["amount"], "-29.99 EUR");
    assert_eq!(panel["rows"][1]["tone"], "warning");

    // Activate patches the profile status without a re-fetch
    let response = app
        .clone()
        .oneshot(post_json(
            &format!("/api/v1/detail/sessions/{session_id}/actions/activate"),
            json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let outcome = read_json(response).await;
    assert_eq!(outcome["status"], "succeeded");
    assert_eq!(outcome["resultingStatus"], "Active");

    let (_, model) = get_model(&app, &session_id).await;
    assert_eq!(model["fields"]["status"], "Active");

    // Tear the session down
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri(format!("/api/v1/detail/sessions/{session_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 204);

    let (status, _) = get_model(&app, &session_id).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn create_session_rejects_empty_entity_id() {
    let platform_url = spawn_stub_platform().await;
    let app = build_test_router(platform_url).await;

    let response = app
        .oneshot(post_json("/api/v1/detail/sessions", json!({"entityId": ""})))
        .await
        .unwrap();
    assert_eq!(response.status(), 422);
}

#[tokio::test]
async fn unknown_session_is_not_found() {
    let platform_url = spawn_stub_platform().await;
    let app = build_test_router(platform_url).await;

    let (status, body) = get_model(&app, "not-a-session").await;
    assert_eq!(status, 404);
    assert!(body["error"].as_str().unwrap().contains("not-a-session"));
}

#[tokio::test]
async fn status_endpoint_reports_ok() {
    let platform_url = spawn_stub_platform().await;
    let app = build_test_router(platform_url).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/status")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body = read_json(response).await;
    assert_eq!(body["status"], "ok");
    assert!(body["version"].as_str().is_some());
}
