//! Shared helpers for block API tests.

use docpress_client::NoticeClient;
use docpress_core::PublishConfig;
use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// API key every mocked endpoint requires.
pub const API_KEY: &str = "test-key";

/// Project block id used across tests.
pub const PROJECT_ID: &str = "proj-1";

/// Configuration pointing at the mock server.
pub fn config(server: &MockServer) -> PublishConfig {
    PublishConfig::new(Some(API_KEY.to_string()), Some(PROJECT_ID.to_string()))
        .unwrap()
        .with_base_url(server.uri())
}

/// Client pointing at the mock server.
pub fn client(server: &MockServer) -> NoticeClient {
    NoticeClient::new(&config(server)).unwrap()
}

/// `{"data": value}` response body.
pub fn envelope(value: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "data": value }))
}

/// Mount `GET /blocks/{id}` returning a record with `children`.
pub async fn mount_get(server: &MockServer, id: &str, children: &[&str]) {
    Mock::given(method("GET"))
        .and(path(format!("/blocks/{id}")))
        .and(header("api-key", API_KEY))
        .respond_with(envelope(json!({ "_id": id, "children": children })))
        .expect(1)
        .mount(server)
        .await;
}

/// Mount `DELETE /blocks/{id}`.
pub async fn mount_delete(server: &MockServer, id: &str) {
    Mock::given(method("DELETE"))
        .and(path(format!("/blocks/{id}")))
        .and(header("api-key", API_KEY))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(server)
        .await;
}

/// Mount `POST /blocks` for bodies containing `partial`, answering with `new_id`.
pub async fn mount_create(server: &MockServer, partial: Value, new_id: &str) {
    Mock::given(method("POST"))
        .and(path("/blocks"))
        .and(header("api-key", API_KEY))
        .and(body_partial_json(partial))
        .respond_with(envelope(json!({ "_id": new_id })))
        .expect(1)
        .mount(server)
        .await;
}

/// `METHOD /path` of every request the server received, in order.
pub async fn request_log(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| format!("{} {}", request.method, request.url.path()))
        .collect()
}
