//! Shared helpers for client integration tests

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use siteline_client::{ApiClient, ClientConfig, StaticToken};
use siteline_core::{Environment, Stage};
use wiremock::{MockServer, Request};

pub const TOKEN: &str = "test-admin-token";

/// Route client logs to the test harness. Filter with `RUST_LOG`.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "siteline_client=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

pub fn config(server: &MockServer) -> ClientConfig {
    init_logging();
    ClientConfig::for_origin(server.uri())
}

/// Server-safe client pointed at the mock server
pub fn server_client(server: &MockServer) -> ApiClient {
    ApiClient::server(&config(server), &Environment::server(Stage::Dev))
        .expect("Failed to build server client")
}

/// Interactive client carrying `TOKEN`
pub fn admin_client(server: &MockServer) -> ApiClient {
    ApiClient::interactive(
        &config(server),
        &Environment::server(Stage::Dev),
        Arc::new(StaticToken::new(TOKEN)),
    )
    .expect("Failed to build interactive client")
}

/// Interactive client with short timeouts for timeout tests
pub fn impatient_client(server: &MockServer) -> ApiClient {
    client_with_timeouts(server, Duration::from_millis(200), Duration::from_millis(200))
}

/// Interactive client with separate JSON and upload timeouts
pub fn client_with_timeouts(
    server: &MockServer,
    timeout: Duration,
    upload_timeout: Duration,
) -> ApiClient {
    let config = config(server).with_timeouts(timeout, upload_timeout);
    ApiClient::interactive(
        &config,
        &Environment::server(Stage::Dev),
        Arc::new(StaticToken::new(TOKEN)),
    )
    .expect("Failed to build interactive client")
}

/// The single request the mock server received
pub async fn only_request(server: &MockServer) -> Request {
    let mut requests = server
        .received_requests()
        .await
        .expect("Request recording is disabled");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests.remove(0)
}

pub fn header<'a>(request: &'a Request, name: &str) -> Option<&'a str> {
    request.headers.get(name).and_then(|v| v.to_str().ok())
}

pub fn body_text(request: &Request) -> String {
    String::from_utf8_lossy(&request.body).into_owned()
}

/// True when a multipart body contains the text field `name=value`
pub fn has_form_field(request: &Request, name: &str, value: &str) -> bool {
    body_text(request).contains(&format!("name=\"{}\"\r\n\r\n{}\r\n", name, value))
}
