/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for HTTP client
[POS]:    Integration tests - HTTP endpoints
[UPDATE]: When HTTP endpoints change
*/

mod common;

use common::{authenticated_client, completed_task_body, mock_api_key, setup_mock_server};
use tanuki_adapter::{ClientConfig, Credentials, TanukiClient, TanukiError, TaskRequest, TaskStatus};
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_creation() {
    let _client = assert_ok!(TanukiClient::new());
}

#[test]
fn test_client_with_config() {
    let config = ClientConfig::default();
    let _client = assert_ok!(TanukiClient::with_config(config));
}

#[test]
fn test_client_rejects_invalid_base_url() {
    assert!(TanukiClient::with_base_url("not a url").is_err());
}

#[test]
fn test_client_credentials_roundtrip() {
    let mut client = assert_ok!(TanukiClient::new());
    let credentials = Credentials {
        api_key: mock_api_key(),
    };

    client.set_credentials(credentials.clone());
    let stored = client.credentials().expect("credentials should be set");
    assert_eq!(stored.api_key, credentials.api_key);
}

#[tokio::test]
async fn test_run_task_success() {
    let server = setup_mock_server().await;
    let request = TaskRequest::new("Write a sort function");

    Mock::given(method("POST"))
        .and(path("/run_task"))
        .and(header("X-API-Key", mock_api_key().as_str()))
        .and(body_json(&request))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(completed_task_body("Write a sort function")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = authenticated_client(&server);
    let response = assert_ok!(client.run_task(&request).await);
    assert_eq!(response.status, TaskStatus::Completed);
    assert!(
        response
            .result
            .as_deref()
            .unwrap()
            .contains(r#"Task: "Write a sort function""#)
    );
}

#[tokio::test]
async fn test_run_task_carries_context_and_files() {
    let server = setup_mock_server().await;
    let request = TaskRequest {
        task_description: "Refactor the parser".to_string(),
        context: Some("fn parse() {}".to_string()),
        file_paths: Some(vec!["src/parser.rs".to_string()]),
    };

    Mock::given(method("POST"))
        .and(path("/run_task"))
        .and(body_json(&request))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(completed_task_body("Refactor the parser")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = authenticated_client(&server);
    assert_ok!(client.run_task(&request).await);
}

#[tokio::test]
async fn test_run_task_invalid_key_maps_to_auth_error() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/run_task"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "detail": "Invalid API Key",
        })))
        .mount(&server)
        .await;

    let client = authenticated_client(&server);
    let err = client
        .run_task(&TaskRequest::new("anything"))
        .await
        .unwrap_err();
    match err {
        TanukiError::Authentication { message } => assert_eq!(message, "Invalid API Key"),
        other => panic!("Expected Authentication error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_run_task_without_credentials_fails_before_sending() {
    let server = setup_mock_server().await;
    // No mock mounted: the request must never reach the server.
    let client = TanukiClient::with_base_url(&server.uri()).unwrap();
    let err = client
        .run_task(&TaskRequest::new("anything"))
        .await
        .unwrap_err();
    assert!(err.is_auth_error());
}

#[tokio::test]
async fn test_run_task_rate_limited() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/run_task"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "12")
                .set_body_json(serde_json::json!({
                    "detail": "Rate limit exceeded. Max 5 requests per minute.",
                })),
        )
        .mount(&server)
        .await;

    let client = authenticated_client(&server);
    let err = client
        .run_task(&TaskRequest::new("anything"))
        .await
        .unwrap_err();
    match err {
        TanukiError::RateLimit { retry_after } => assert_eq!(retry_after, 12),
        other => panic!("Expected RateLimit error, got {other:?}"),
    }
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_run_task_malformed_body_is_serialization_error() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/run_task"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = authenticated_client(&server);
    let err = client
        .run_task(&TaskRequest::new("anything"))
        .await
        .unwrap_err();
    assert!(matches!(err, TanukiError::Serialization(_)));
}

#[tokio::test]
async fn test_health_requires_api_key() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .and(header("X-API-Key", mock_api_key().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ok",
            "message": "Tanuki-Programmer API is healthy.",
        })))
        .mount(&server)
        .await;

    let client = authenticated_client(&server);
    let health = assert_ok!(client.health().await);
    assert_eq!(health.status, "ok");
    assert_eq!(health.message, "Tanuki-Programmer API is healthy.");
}
