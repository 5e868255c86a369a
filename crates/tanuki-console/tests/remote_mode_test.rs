/*
[INPUT]:  The compiled `tanuki` binary and a mock service
[OUTPUT]: End-to-end verification of remote submissions
[POS]:    Integration tests - remote mode against a mock server
[UPDATE]: When the service contract or remote flags change
*/

use std::process::Command;

use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn run_binary(args: Vec<String>) -> std::process::Output {
    tokio::task::spawn_blocking(move || {
        Command::new(env!("CARGO_BIN_EXE_tanuki"))
            .args(&args)
            .env("RUST_LOG", "error")
            .output()
            .expect("Failed to start tanuki binary")
    })
    .await
    .expect("binary task panicked")
}

#[tokio::test(flavor = "multi_thread")]
async fn remote_run_prints_service_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/run_task"))
        .and(header("X-API-Key", "supersecretapikey123"))
        .and(body_partial_json(serde_json::json!({
            "task_description": "Ship the feature",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "task_id": "task_1700000000",
            "status": "completed",
            "result": "remote says: shipped",
            "error": null,
            "timestamp": 1700000000.0,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_binary(vec![
        "run".into(),
        "Ship the feature".into(),
        "--remote".into(),
        "--api-url".into(),
        server.uri(),
        "--api-key".into(),
        "supersecretapikey123".into(),
    ])
    .await;

    assert!(
        output.status.success(),
        "Stdout: {}\nStderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("remote says: shipped"));
}

#[tokio::test(flavor = "multi_thread")]
async fn remote_failure_renders_error_and_exit_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/run_task"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "task_id": "task_1",
            "status": "failed",
            "result": null,
            "error": "adapter pool exhausted",
            "timestamp": 1700000000.0,
        })))
        .mount(&server)
        .await;

    let output = run_binary(vec![
        "run".into(),
        "Ship the feature".into(),
        "--remote".into(),
        "--api-url".into(),
        server.uri(),
        "--api-key".into(),
        "k".into(),
    ])
    .await;

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Error: adapter pool exhausted"));
}

#[tokio::test(flavor = "multi_thread")]
async fn remote_rejected_key_reports_auth_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/run_task"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "detail": "Invalid API Key",
        })))
        .mount(&server)
        .await;

    let output = run_binary(vec![
        "run".into(),
        "Ship the feature".into(),
        "--remote".into(),
        "--api-url".into(),
        server.uri(),
        "--api-key".into(),
        "wrong".into(),
    ])
    .await;

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Error: Authentication failed: Invalid API Key"));
}
