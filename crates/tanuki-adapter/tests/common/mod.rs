/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for tanuki-adapter tests

use tanuki_adapter::{Credentials, TanukiClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// API key recognized by the mock fixtures
pub fn mock_api_key() -> String {
    "supersecretapikey123".to_string()
}

/// Client pointed at the mock server with the fixture API key set
pub fn authenticated_client(server: &MockServer) -> TanukiClient {
    let mut client = TanukiClient::with_base_url(&server.uri()).expect("client for mock server");
    client.set_credentials(Credentials {
        api_key: mock_api_key(),
    });
    client
}

/// A completed-task response body echoing `description` as its result
#[allow(dead_code)]
pub fn completed_task_body(description: &str) -> serde_json::Value {
    serde_json::json!({
        "task_id": "task_1700000000",
        "status": "completed",
        "result": format!("Task: \"{description}\"\n\nTask completed successfully!"),
        "error": null,
        "timestamp": 1700000000.0,
    })
}
