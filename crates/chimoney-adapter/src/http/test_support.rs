/*
[INPUT]:  Mock servers and transport doubles
[OUTPUT]: Shared helpers for feature module unit tests
[POS]:    HTTP layer - test-only utilities
[UPDATE]: When feature module tests need new fixtures
*/

use async_trait::async_trait;
use serde_json::Value;
use wiremock::{MockServer, ResponseTemplate};

use crate::http::transport::{ApiRequest, Transport};
use crate::http::{ApiKey, ChimoneyClient, Result};

pub(crate) const TEST_API_KEY: &str = "test-api-key";

/// Client pointed at a wiremock server
pub(crate) fn client_for(server: &MockServer) -> ChimoneyClient {
    ChimoneyClient::with_http_client(
        ApiKey::new(TEST_API_KEY).expect("api key"),
        reqwest::Client::new(),
        &server.uri(),
    )
    .expect("client init")
}

/// 200 response wrapping `data` in a success envelope
pub(crate) fn success(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "status": "success",
        "data": data,
    }))
}

/// Transport that fails the test when a request reaches it
pub(crate) struct UnreachableTransport;

#[async_trait]
impl Transport for UnreachableTransport {
    async fn perform(&self, request: ApiRequest) -> Result<Vec<u8>> {
        panic!(
            "transport invoked for {} {} after failed validation",
            request.method(),
            request.path()
        );
    }
}
