#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! `HttpSecretApi` against a canned local server

mod common;

use common::serve_once;
use serde_json::json;
use tresor_client::{
    ClientConfig, ClientError, HttpSecretApi, SecretApi, SecretContent, SecretId,
    UpdateSecretRequest,
};

fn api(base: &str) -> HttpSecretApi {
    HttpSecretApi::new(ClientConfig::with_base(base)).unwrap()
}

#[tokio::test]
async fn list_for_user_parses_records() {
    let (base, server) = serve_once(
        "200 OK",
        r#"[{"id":1,"userId":7,"content":"{\"url\":\"https://x.com\"}"},{"id":2,"userId":7,"content":"b64=="}]"#,
    )
    .await;

    let records = require_ok!(api(&base).list_for_user("a@b.com").await);
    let request = server.await.unwrap();

    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/api/secrets?email=a%40b.com");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, SecretId(1));
    assert_eq!(records[0].user_id, 7);
    assert_eq!(records[0].content, r#"{"url":"https://x.com"}"#);
    assert_eq!(records[1].content, "b64==");
}

#[tokio::test]
async fn list_for_user_null_body_is_empty() {
    let (base, _server) = serve_once("200 OK", "null").await;
    let records = require_ok!(api(&base).list_for_user("a@b.com").await);
    assert!(records.is_empty());
}

#[tokio::test]
async fn list_for_user_garbage_is_parse_error() {
    let (base, _server) = serve_once("200 OK", "<html>").await;
    let result = api(&base).list_for_user("a@b.com").await;
    assert!(
        matches!(result, Err(ClientError::ParseError { .. })),
        "unexpected result: {result:?}"
    );
}

#[tokio::test]
async fn update_sends_put_with_json_body() {
    let (base, server) = serve_once("200 OK", "ignored").await;
    let request = UpdateSecretRequest {
        email: "a@b.com".to_string(),
        encrypt_password: "p".to_string(),
        content: SecretContent {
            url: "https://x.com".to_string(),
            user_name: "bob".to_string(),
            password: "s3cret".to_string(),
        },
    };

    require_ok!(api(&base).update(SecretId(1), &request).await);
    let captured = server.await.unwrap();

    assert_eq!(captured.method, "PUT");
    assert_eq!(captured.path, "/api/secrets/1");
    let body: serde_json::Value = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(
        body,
        json!({
            "email": "a@b.com",
            "encryptPassword": "p",
            "content": { "url": "https://x.com", "userName": "bob", "password": "s3cret" }
        })
    );
}

#[tokio::test]
async fn update_failure_carries_body_text() {
    let (base, _server) = serve_once("500 Internal Server Error", "db down").await;
    let request = UpdateSecretRequest {
        email: "a@b.com".to_string(),
        encrypt_password: "p".to_string(),
        content: SecretContent::default(),
    };

    let err = api(&base).update(SecretId(1), &request).await.unwrap_err();
    assert!(matches!(err, ClientError::Http { status: 500, .. }));
    assert_eq!(err.to_string(), "db down");
}

#[tokio::test]
async fn delete_failure_without_body_uses_status_line() {
    let (base, server) = serve_once("404 Not Found", "").await;

    let err = api(&base).delete(SecretId(42)).await.unwrap_err();
    let captured = server.await.unwrap();

    assert_eq!(captured.method, "DELETE");
    assert_eq!(captured.path, "/api/secrets/42");
    assert_eq!(err.to_string(), "HTTP 404 Not Found");
    assert!(err.is_expected());
}

#[tokio::test]
async fn unreachable_server_is_network_error() {
    // Bind then drop to get a port nobody listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let result = api(&base).delete(SecretId(1)).await;
    assert!(
        matches!(result, Err(ClientError::NetworkError { .. })),
        "unexpected result: {result:?}"
    );
}
