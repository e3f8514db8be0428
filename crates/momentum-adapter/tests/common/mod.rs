/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for momentum-adapter tests

use momentum_adapter::{ClientConfig, Credentials, MomentumClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Bearer token accepted by every mock
pub fn mock_token() -> String {
    "9e6a6f5a-0c1e-4a3b-8a2f-momentum-test".to_string()
}

/// Client pointed at the mock server, authenticated with [`mock_token`]
pub fn client_for(server: &MockServer) -> MomentumClient {
    MomentumClient::with_config(ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    })
    .expect("client init")
    .with_credentials(Credentials::bearer(mock_token()))
}
