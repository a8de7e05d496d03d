/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and transport doubles
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for chimoney-adapter tests

use std::sync::Mutex;

use async_trait::async_trait;
use chimoney_adapter::{ApiKey, ApiRequest, ChimoneyClient, ClientConfig, Result, Transport};
use wiremock::MockServer;

#[allow(dead_code)]
pub const TEST_API_KEY: &str = "test-api-key";

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client whose base URL points at the mock server
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> ChimoneyClient {
    let config = ClientConfig {
        base_url: Some(server.uri()),
        ..ClientConfig::default()
    };
    ChimoneyClient::with_config(test_api_key(), config).expect("client init")
}

#[allow(dead_code)]
pub fn test_api_key() -> ApiKey {
    ApiKey::new(TEST_API_KEY).expect("api key")
}

/// Transport double that records requests and answers with an empty success envelope
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<ApiRequest>>,
}

#[allow(dead_code)]
impl RecordingTransport {
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().expect("recorder lock").clone()
    }

    pub fn last(&self) -> ApiRequest {
        self.requests().pop().expect("no request recorded")
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn perform(&self, request: ApiRequest) -> Result<Vec<u8>> {
        self.requests.lock().expect("recorder lock").push(request);
        Ok(br#"{"status":"success","data":{}}"#.to_vec())
    }
}

/// Transport double that fails the test if it is ever reached
#[allow(dead_code)]
pub struct PanicTransport;

#[async_trait]
impl Transport for PanicTransport {
    async fn perform(&self, request: ApiRequest) -> Result<Vec<u8>> {
        panic!(
            "validation should have rejected {} {} before dispatch",
            request.method(),
            request.path()
        );
    }
}
