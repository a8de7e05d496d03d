/*
[INPUT]:  Method, path, optional JSON body and query parameters
[OUTPUT]: Raw success body or a classified error; generic JSON decoding
[POS]:    HTTP layer - narrow dispatch capability shared by all feature modules
[UPDATE]: When request shape or status/decoding rules change
*/

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::http::{ChimoneyError, Result};

/// How a request body travels on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyMode {
    /// Serialized as the JSON request body
    #[default]
    Json,
    /// For GET requests, top-level object entries become query parameters
    /// and no body is sent. Other methods still send JSON.
    QueryForGet,
}

/// One HTTP exchange against the API, relative to the configured base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    method: Method,
    path: String,
    body: Option<Value>,
    query: Vec<(String, String)>,
    body_mode: BodyMode,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            query: Vec::new(),
            body_mode: BodyMode::Json,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach a JSON body
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        let value = serde_json::to_value(body).map_err(ChimoneyError::Encode)?;
        self.body = Some(value);
        Ok(self)
    }

    /// Append an explicit query parameter
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Switch to [`BodyMode::QueryForGet`]
    pub fn body_as_query(mut self) -> Self {
        self.body_mode = BodyMode::QueryForGet;
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub fn body_mode(&self) -> BodyMode {
        self.body_mode
    }

    fn promotes_body(&self) -> bool {
        self.body_mode == BodyMode::QueryForGet && self.method == Method::GET
    }

    /// Body that goes on the wire, `None` when it was promoted to the query
    pub fn wire_body(&self) -> Option<&Value> {
        if self.promotes_body() {
            None
        } else {
            self.body.as_ref()
        }
    }

    /// Final query parameters.
    ///
    /// Explicit parameters come first and win: a promoted body entry whose key
    /// is already present is dropped. Null entries are skipped.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = self.query.clone();
        if !self.promotes_body() {
            return pairs;
        }

        if let Some(Value::Object(entries)) = &self.body {
            for (key, value) in entries {
                if pairs.iter().any(|(existing, _)| existing == key) {
                    continue;
                }
                let rendered = match value {
                    Value::Null => continue,
                    Value::String(text) => text.clone(),
                    other => other.to_string(),
                };
                pairs.push((key.clone(), rendered));
            }
        }
        pairs
    }
}

/// Capability every feature module depends on: perform one request.
///
/// Implementations return the response body on a 2xx status,
/// [`ChimoneyError::Status`] otherwise, and [`ChimoneyError::Transport`] when
/// the exchange itself failed.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn perform(&self, request: ApiRequest) -> Result<Vec<u8>>;
}

/// Perform `request` and decode the success body into `T`
pub async fn send_json<T, C>(transport: &C, request: ApiRequest) -> Result<T>
where
    T: DeserializeOwned,
    C: Transport + ?Sized,
{
    let body = transport.perform(request).await?;
    serde_json::from_slice(&body).map_err(ChimoneyError::Decode)
}

/// Map a response status onto the success range `[200, 300)`
pub fn ensure_success(status: StatusCode, body: &[u8]) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }
    Err(ChimoneyError::status_error(
        status,
        String::from_utf8_lossy(body),
    ))
}
