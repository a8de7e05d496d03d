/*
[INPUT]:  API key, HTTP configuration (environment, base URL, timeouts)
[OUTPUT]: Configured reqwest-backed transport plus feature module handles
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::http::transport::{ApiRequest, Transport, ensure_success};
use crate::http::{
    Account, ChimoneyError, Info, MobileMoney, Payouts, Redeem, Result, SubAccount, Wallet,
};
use crate::types::Environment;

/// Environment variable read by [`ApiKey::from_env`]
pub const API_KEY_ENV_VAR: &str = "CHIMONEY_API_KEY";

/// Header carrying the API key on every request
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Chimoney API key. `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ChimoneyError::Config("API key is required".to_string()));
        }
        Ok(Self(key))
    }

    /// Read the key from `CHIMONEY_API_KEY`
    pub fn from_env() -> Result<Self> {
        let key = std::env::var(API_KEY_ENV_VAR)
            .map_err(|e| ChimoneyError::Config(format!("{API_KEY_ENV_VAR}: {e}")))?;
        Self::new(key)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    #[serde(rename = "timeout_secs", with = "seconds")]
    pub timeout: Duration,
    #[serde(rename = "connect_timeout_secs", with = "seconds")]
    pub connect_timeout: Duration,
    pub environment: Environment,
    /// Overrides the environment's base URL (mock servers, proxies)
    pub base_url: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            environment: Environment::Production,
            base_url: None,
        }
    }
}

impl ClientConfig {
    pub fn sandbox() -> Self {
        Self {
            environment: Environment::Sandbox,
            ..Self::default()
        }
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
    }
}

mod seconds {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}

/// Main HTTP client for the Chimoney API.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ChimoneyClient {
    http_client: Client,
    base_url: Url,
    api_key: ApiKey,
}

impl ChimoneyClient {
    /// Create a production client with default configuration
    pub fn new(api_key: ApiKey) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a sandbox client with default timeouts
    pub fn sandbox(api_key: ApiKey) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::sandbox())
    }

    /// Create a new client with custom configuration
    pub fn with_config(api_key: ApiKey, config: ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Self::with_http_client(api_key, http_client, config.base_url())
    }

    /// Create a client around an existing `reqwest::Client`
    pub fn with_http_client(api_key: ApiKey, http_client: Client, base_url: &str) -> Result<Self> {
        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            api_key,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn account(&self) -> Account<'_> {
        Account::new(self)
    }

    pub fn info(&self) -> Info<'_> {
        Info::new(self)
    }

    pub fn mobile_money(&self) -> MobileMoney<'_> {
        MobileMoney::new(self)
    }

    pub fn payouts(&self) -> Payouts<'_> {
        Payouts::new(self)
    }

    pub fn redeem(&self) -> Redeem<'_> {
        Redeem::new(self)
    }

    pub fn sub_account(&self) -> SubAccount<'_> {
        SubAccount::new(self)
    }

    pub fn wallet(&self) -> Wallet<'_> {
        Wallet::new(self)
    }

    /// Build full URL: base URL and path are concatenated so the version
    /// segment of the base URL is kept.
    fn endpoint_url(&self, path: &str, query: &[(String, String)]) -> Result<Url> {
        if !path.starts_with('/') {
            return Err(ChimoneyError::Config(format!(
                "request path must start with '/': {path}"
            )));
        }
        // Query and fragment only come from the request's query pairs.
        if path.contains(['?', '#']) {
            return Err(ChimoneyError::Config(format!(
                "request path must not contain '?' or '#': {path}"
            )));
        }

        let base = self.base_url.as_str().trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}{path}"))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }
}

#[async_trait]
impl Transport for ChimoneyClient {
    async fn perform(&self, request: ApiRequest) -> Result<Vec<u8>> {
        let url = self.endpoint_url(request.path(), &request.query_pairs())?;

        let mut builder = self
            .http_client
            .request(request.method().clone(), url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .header(API_KEY_HEADER, self.api_key.expose());
        if let Some(body) = request.wire_body() {
            builder = builder.json(body);
        }

        debug!(method = %request.method(), path = request.path(), "chimoney request sent");
        let response = builder.send().await?;
        let status = response.status();

        // An unreadable error body must not mask the status code.
        let body = match response.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(_) if !status.is_success() => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        debug!(
            method = %request.method(),
            path = request.path(),
            status = status.as_u16(),
            bytes = body.len(),
            "chimoney response received"
        );

        ensure_success(status, &body)?;
        Ok(body)
    }
}
