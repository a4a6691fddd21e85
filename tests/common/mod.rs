/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for gax-bank-adapter tests

use gax_bank_adapter::{ClientConfig, GaxClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Build a client pointed at the given mock server
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> GaxClient {
    GaxClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init")
}

/// Mock API token for testing
#[allow(dead_code)]
pub fn mock_token() -> String {
    "9f86d081884c7d659a2feaa0c55ad015".to_string()
}
