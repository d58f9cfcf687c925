//! Shared helpers for HTTP adapter tests.

use serde_json::{Value, json};
use taskdesk::task::adapters::http::{HttpClientConfig, HttpTaskService};
use url::Url;
use wiremock::MockServer;

/// Path prefix the adapter is configured with.
pub const API_PREFIX: &str = "/api";

/// Starts a fresh mock API server.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Builds an adapter whose API base is `{server}/api`.
pub fn client_for(server: &MockServer) -> HttpTaskService {
    let base = Url::parse(&format!("{}{API_PREFIX}", server.uri())).expect("mock server URI");
    HttpTaskService::new(HttpClientConfig::new(base)).expect("client should build")
}

/// Returns the full mock path for an endpoint below the API prefix.
pub fn api_path(endpoint: &str) -> String {
    format!("{API_PREFIX}/{endpoint}")
}

/// JSON body of a task as the backend returns it.
pub fn task_json(id: i64, title: &str, status: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "status": status,
        "dueDate": "2025-04-01T10:00:00Z",
    })
}
