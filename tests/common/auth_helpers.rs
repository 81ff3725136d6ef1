//! Authentication test helpers
//!
//! Provides utilities for creating test users through the API and
//! building `Authorization` headers.

use axum::http::{header, HeaderName, HeaderValue, StatusCode};
use serde_json::json;

use super::database::TestApp;

/// Test user credentials
pub struct TestUser {
    pub username: String,
    pub password: String,
    pub token: String,
}

impl TestUser {
    /// `Authorization: Bearer <token>` header for this user
    pub fn auth_header(&self) -> (HeaderName, HeaderValue) {
        bearer(&self.token)
    }
}

/// Build a bearer `Authorization` header from a raw token
pub fn bearer(token: &str) -> (HeaderName, HeaderValue) {
    (
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).expect("Invalid header value"),
    )
}

/// Register a user through `POST /register`
pub async fn register_user(app: &TestApp, username: &str, password: &str) -> TestUser {
    let response = app
        .server
        .post("/register")
        .json(&json!({ "username": username, "password": password }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK, "register failed");
    let body: serde_json::Value = response.json();
    let token = body["token"]
        .as_str()
        .expect("register response has no token")
        .to_string();

    TestUser {
        username: username.to_string(),
        password: password.to_string(),
        token,
    }
}
