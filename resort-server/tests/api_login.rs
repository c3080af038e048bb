//! HTTP API integration tests: login flow, auth middleware, admin gating.
//! Run: cargo test -p resort-server --test api_login

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

async fn login(app: &Router, email: &str, password: &str) -> axum::response::Response {
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({"email": email, "password": password}).to_string(),
        ))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

#[tokio::test]
async fn health_is_public() {
    let (_tmp, app) = test_app().await;

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn login_returns_token_and_rejects_bad_credentials() {
    let (_tmp, app) = test_app().await;

    let response = login(&app, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["user"]["email"], ADMIN_EMAIL);
    assert_eq!(body["user"]["role"], "admin");

    // Wrong password and unknown email produce the same error shape
    let response = login(&app, ADMIN_EMAIL, "wrong-pass").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let wrong_pass = json_body(response).await;

    let response = login(&app, "nobody@resort.example", "wrong-pass").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let unknown = json_body(response).await;
    assert_eq!(wrong_pass["message"], unknown["message"]);
}

#[tokio::test]
async fn protected_routes_require_token() {
    let (_tmp, app) = test_app().await;

    // No token
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/tickets")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Garbage token
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/tickets")
                .header(header::AUTHORIZATION, "Bearer not-a-jwt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Valid token
    let body = json_body(login(&app, ADMIN_EMAIL, ADMIN_PASSWORD).await).await;
    let token = body["token"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/tickets")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // /api/auth/me reflects the claims
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/auth/me")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let me = json_body(response).await;
    assert_eq!(me["email"], ADMIN_EMAIL);
}

#[tokio::test]
async fn staff_routes_enforce_admin_and_self_rules() {
    let (_tmp, app) = test_app().await;

    let body = json_body(login(&app, ADMIN_EMAIL, ADMIN_PASSWORD).await).await;
    let admin_token = body["token"].as_str().unwrap().to_string();
    let admin_id = body["user"]["id"].as_str().unwrap().to_string();

    // Admin can list staff
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/staff")
                .header(header::AUTHORIZATION, format!("Bearer {}", admin_token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Admin cannot delete their own account
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/staff/{}", admin_id))
                .header(header::AUTHORIZATION, format!("Bearer {}", admin_token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Create a regular employee, then verify they are locked out of staff routes
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/staff")
                .header(header::AUTHORIZATION, format!("Bearer {}", admin_token))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "email": "employee@resort.example",
                        "password": "employee-pass",
                        "name": "Front Desk",
                        "role": "employee"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(login(&app, "employee@resort.example", "employee-pass").await).await;
    let employee_token = body["token"].as_str().unwrap().to_string();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/staff")
                .header(header::AUTHORIZATION, format!("Bearer {}", employee_token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn dashboard_summary_shape() {
    let (_tmp, app) = test_app().await;

    let body = json_body(login(&app, ADMIN_EMAIL, ADMIN_PASSWORD).await).await;
    let token = body["token"].as_str().unwrap().to_string();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/dashboard?view=weekly&date=2026-08-28")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["view"], "weekly");
    // Sunday-start week containing Friday 2026-08-28
    assert_eq!(body["start_date"], "2026-08-23");
    assert_eq!(body["end_date"], "2026-08-29");
    assert_eq!(body["transaction_count"], 0);
    assert_eq!(body["reservation_count"], 0);
    assert_eq!(body["trend"].as_array().unwrap().len(), 7);
}
