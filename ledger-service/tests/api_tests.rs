mod common;

use chrono::Duration;
use common::TestApp;
use reqwest::StatusCode;

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::spawn().await;

    let response = app.register("scientist@example.com", "SecurePassword123").await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["email"], "scientist@example.com");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::spawn().await;

    app.register("scientist@example.com", "SecurePassword123").await;

    let response = app.register("scientist@example.com", "OtherPassword456").await;

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("already registered"));
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app.register("not-an-email", "SecurePassword123").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .to_lowercase()
        .contains("email"));
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;

    app.register("scientist@example.com", "SecurePassword123").await;

    let response = app.login("scientist@example.com", "SecurePassword123").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["token_type"], "bearer");
    assert!(!body["data"]["access_token"]
        .as_str()
        .expect("access_token is not a string")
        .is_empty());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::spawn().await;

    app.register("scientist@example.com", "SecurePassword123").await;

    let unknown_email = app.login("nobody@example.com", "SecurePassword123").await;
    let wrong_password = app.login("scientist@example.com", "WrongPassword").await;

    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);

    // Same status and same body: the caller cannot probe account existence
    let unknown_body: serde_json::Value = unknown_email.json().await.unwrap();
    let wrong_body: serde_json::Value = wrong_password.json().await.unwrap();
    assert_eq!(unknown_body, wrong_body);
}

#[tokio::test]
async fn test_me_with_valid_token() {
    let app = TestApp::spawn().await;

    app.register("scientist@example.com", "SecurePassword123").await;
    let token = app.login_token("scientist@example.com", "SecurePassword123").await;

    let response = app
        .get("/auth/me")
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["email"], "scientist@example.com");
}

#[tokio::test]
async fn test_me_without_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/auth/me")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_non_bearer_header() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/auth/me")
        .header("Authorization", "Basic c2NpZW50aXN0OnB3")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_tampered_token() {
    let app = TestApp::spawn().await;

    app.register("scientist@example.com", "SecurePassword123").await;
    let token = app.login_token("scientist@example.com", "SecurePassword123").await;

    // Flip bits in the signature segment
    let (head, signature) = token.rsplit_once('.').expect("Token has no signature");
    let mut chars: Vec<char> = signature.chars().collect();
    chars[0] = if chars[0] == 'A' { 'B' } else { 'A' };
    let tampered = format!("{}.{}", head, chars.into_iter().collect::<String>());

    let response = app
        .get("/auth/me")
        .bearer_auth(&tampered)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_expired_token() {
    let app = TestApp::spawn().await;

    app.register("scientist@example.com", "SecurePassword123").await;

    let expired = app
        .token_issuer
        .issue("scientist@example.com", Some(Duration::seconds(-60)))
        .expect("Failed to issue token");

    let response = app
        .get("/auth/me")
        .bearer_auth(&expired)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_orphaned_subject() {
    let app = TestApp::spawn().await;

    // Correctly signed, but the subject was never registered
    let orphaned = app
        .token_issuer
        .issue("ghost@example.com", None)
        .expect("Failed to issue token");

    let response = app
        .get("/auth/me")
        .bearer_auth(&orphaned)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_login_authenticate_flow() {
    let app = TestApp::spawn().await;

    let first: serde_json::Value = app
        .register("a@x.com", "pw1")
        .await
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(first["data"]["id"], 1);

    let second: serde_json::Value = app
        .register("b@x.com", "pw2")
        .await
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(second["data"]["id"], 2);

    let token = app.login_token("a@x.com", "pw1").await;

    let me: serde_json::Value = app
        .get("/auth/me")
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(me["data"]["id"], 1);
    assert_eq!(me["data"]["email"], "a@x.com");
}

#[tokio::test]
async fn test_status_endpoint() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/status")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["api_status"], "online");
    assert_eq!(body["data"]["chain_connected"], false);
    assert!(body["data"]["current_block"].is_null());
    assert!(body["data"]["version"].is_string());
}
