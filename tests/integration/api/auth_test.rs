//! Authentication API integration tests
//!
//! Tests for the signup and login endpoints.

use axum::http::StatusCode;
use palabrator::backend::store::UserStore;
use palabrator::shared::AuthResponse;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::TestApp;
use crate::{assert_failure, assert_status};

fn signup_body(email: &str, password: &str) -> serde_json::Value {
    json!({
        "name": "Ana",
        "lastName": "Lopez",
        "email": email,
        "password": password
    })
}

#[tokio::test]
async fn test_signup_success() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/auth/signup")
        .json(&signup_body("New.User@Example.com", "password123"))
        .await;

    assert_status!(response, StatusCode::CREATED);
    let body: AuthResponse = response.json();
    assert_eq!(body.email, "new.user@example.com");

    let claims = app.tokens().verify(&body.token).unwrap();
    assert_eq!(claims.email.as_deref(), Some("new.user@example.com"));

    let stored = app.store.find_user_by_email("new.user@example.com").await.unwrap().unwrap();
    assert_eq!(stored.name, "Ana");
    assert_eq!(stored.last_name, "Lopez");
    assert_ne!(stored.password_hash, "password123");
}

#[tokio::test]
async fn test_signup_duplicate_email_any_case() {
    let app = TestApp::new();
    app.seed_user("dup@example.com", "password123").await;

    let response = app
        .server
        .post("/auth/signup")
        .json(&signup_body("DUP@example.com", "password123"))
        .await;

    assert_failure!(response, StatusCode::BAD_REQUEST, "The User Already Exists");
}

#[tokio::test]
async fn test_signup_malformed_body() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/auth/signup")
        .json(&json!({ "email": "ana@example.com", "password": "password123" }))
        .await;
    assert_failure!(response, StatusCode::BAD_REQUEST, "Failed to receive signup data");

    let response = app.server.post("/auth/signup").text("not json").await;
    assert_failure!(response, StatusCode::BAD_REQUEST, "Failed to receive signup data");
}

#[tokio::test]
async fn test_signup_field_validation() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/auth/signup")
        .json(&signup_body("no-at-sign", "password123"))
        .await;
    assert_failure!(response, StatusCode::BAD_REQUEST, "Invalid email format");

    let response = app
        .server
        .post("/auth/signup")
        .json(&signup_body("ana@example.com", ""))
        .await;
    assert_failure!(response, StatusCode::BAD_REQUEST, "Password must not be empty");
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new();
    let user = app.seed_user("login@example.com", "password123").await;

    let response = app
        .server
        .post("/auth/login")
        .json(&json!({ "email": "Login@Example.com", "password": user.password }))
        .await;

    assert_status!(response, StatusCode::OK);
    let body: AuthResponse = response.json();
    assert_eq!(body.email, "login@example.com");

    let claims = app.tokens().verify(&body.token).unwrap();
    assert_eq!(claims.email.as_deref(), Some("login@example.com"));
    assert_eq!(claims.iss, "palabrator");
    assert_eq!(claims.aud, "palabrator-users");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new();
    app.seed_user("login@example.com", "password123").await;

    let response = app
        .server
        .post("/auth/login")
        .json(&json!({ "email": "login@example.com", "password": "wrongpassword" }))
        .await;

    assert_failure!(response, StatusCode::BAD_REQUEST, "Invalid Credentials");
    let body: serde_json::Value = response.json();
    assert!(body.get("token").is_none());
}

#[tokio::test]
async fn test_login_unknown_email() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/auth/login")
        .json(&json!({ "email": "nobody@example.com", "password": "password123" }))
        .await;

    assert_failure!(response, StatusCode::BAD_REQUEST, "Invalid Credentials");
}

#[tokio::test]
async fn test_login_malformed_body() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/auth/login")
        .json(&json!({ "email": "login@example.com" }))
        .await;

    assert_failure!(response, StatusCode::BAD_REQUEST, "Failed to receive credentials");
}

#[tokio::test]
async fn test_signup_then_login() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/auth/signup")
        .json(&signup_body("roundtrip@example.com", "s3cret"))
        .await;
    assert_status!(response, StatusCode::CREATED);

    let response = app
        .server
        .post("/auth/login")
        .json(&json!({ "email": "roundtrip@example.com", "password": "s3cret" }))
        .await;
    assert_status!(response, StatusCode::OK);
}
