mod common;
pub use common::*;

use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use serde_json::json;
use wiremock::MockServer;

#[tokio::test]
async fn send_notification_body_above_limit() {
    let provider = MockServer::start().await;
    let address = spawn_relay(format!("{}/token", provider.uri()), provider.uri()).await;

    let oversized_body = json!({
        "token": "abc",
        "title": "Hi",
        "body": "x".repeat(2 * MAX_HTTP_CONTENT_LEN)
    })
    .to_string();

    let response = Client::new()
        .post(format!("{address}/send-notification"))
        .header(CONTENT_TYPE, "application/json")
        .body(oversized_body)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

    // rejected before any outbound call
    assert!(provider.received_requests().await.unwrap().is_empty());
}
