//! HTTP API integration tests: payload validation rules.
//! Run: cargo test -p resort-server --test api_payload_rules

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use resort_server::api;
use resort_server::core::{Config, ServerState};
use serde_json::{Value, json};
use tower::ServiceExt;

const ADMIN_EMAIL: &str = "admin@resort.example";
const ADMIN_PASSWORD: &str = "bootstrap-pass";

async fn test_app() -> (tempfile::TempDir, Router) {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = Config::with_overrides(tmp.path().to_string_lossy().to_string(), 0);
    config.admin_email = ADMIN_EMAIL.to_string();
    config.admin_password = Some(ADMIN_PASSWORD.to_string());

    let state = ServerState::initialize(&config).await;
    let app = api::build_app(&state).with_state(state);
    (tmp, app)
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn admin_token(app: &Router) -> String {
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({"email": ADMIN_EMAIL, "password": ADMIN_PASSWORD}).to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let body = json_body(response).await;
    body["token"].as_str().unwrap().to_string()
}

async fn post_json(app: &Router, token: &str, uri: &str, payload: Value) -> axum::response::Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

async fn put_json(app: &Router, token: &str, uri: &str, payload: Value) -> axum::response::Response {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

#[tokio::test]
async fn room_capacity_must_be_at_least_one() {
    let (_tmp, app) = test_app().await;
    let token = admin_token(&app).await;

    let response = post_json(
        &app,
        &token,
        "/api/accommodations",
        json!({"name": "Giljo Pension"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let acc = json_body(response).await;
    let acc_id = acc["id"].as_str().unwrap().to_string();
    let rooms_uri = format!("/api/accommodations/{}/rooms", acc_id);

    // Zero capacity rejected at creation
    let response = post_json(
        &app,
        &token,
        &rooms_uri,
        json!({"name": "Ondol A", "capacity": 0, "price": "150000"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        &app,
        &token,
        &rooms_uri,
        json!({"name": "Ondol A", "capacity": 4, "price": "150000"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let room = json_body(response).await;
    let room_id = room["id"].as_str().unwrap().to_string();

    // And rejected when updating an existing room
    let response = put_json(
        &app,
        &token,
        &format!("/api/rooms/{}", room_id),
        json!({"capacity": 0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = put_json(
        &app,
        &token,
        &format!("/api/rooms/{}", room_id),
        json!({"capacity": 6}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = json_body(response).await;
    assert_eq!(updated["capacity"], 6);
}

#[tokio::test]
async fn reservation_headcount_defaults_to_one() {
    let (_tmp, app) = test_app().await;
    let token = admin_token(&app).await;

    // Omitting headcount yields a single-person reservation
    let response = post_json(
        &app,
        &token,
        "/api/reservations",
        json!({
            "reservation_type": "day",
            "customer_name": "Kim",
            "date": "2026-08-28",
            "total_amount": "100000"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["headcount"], 1);

    // An explicit zero is rejected
    let response = post_json(
        &app,
        &token,
        "/api/reservations",
        json!({
            "reservation_type": "day",
            "customer_name": "Kim",
            "date": "2026-08-28",
            "headcount": 0,
            "total_amount": "100000"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
