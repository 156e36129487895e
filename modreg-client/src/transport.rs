//! Transport layer
//!
//! The catalog talks to the registry through the [`Transport`] trait so that
//! one explicitly constructed transport can be shared by every operation and
//! swapped for an in-memory double in tests. [`HttpTransport`] is the reqwest
//! implementation bound to a fixed base URL.

use async_trait::async_trait;
use modreg_core::codec::Decode;
use modreg_core::dto::discovery::{DISCOVERY_PATH, ServiceDiscovery};
use reqwest::{Client, Response, StatusCode};
use serde_json::{Value, json};
use tracing::debug;

use crate::error::TransportError;

/// Header carrying the module location on `204 No Content` download answers
pub const TERRAFORM_GET_HEADER: &str = "X-Terraform-Get";

/// Ordered query parameters; absent values are never stored
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter
    pub fn with(mut self, key: &str, value: impl ToString) -> Self {
        self.0.push((key.to_string(), value.to_string()));
        self
    }

    /// Append a parameter only when a value is present
    pub fn with_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    /// Value of the first parameter named `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parameter names in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn as_pairs(&self) -> &[(String, String)] {
        &self.0
    }
}

/// Sends requests to the registry and returns decoded JSON bodies
///
/// Implementations report every failure as a [`TransportError`]; translating
/// those into catalog errors is the caller's job.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `path` (relative to the base URL) with the given query
    async fn get(&self, path: &str, query: &QueryParams) -> Result<Value, TransportError>;

    /// POST a JSON body to `path` (relative to the base URL)
    async fn post(&self, path: &str, body: &Value) -> Result<Value, TransportError>;
}

/// HTTP implementation of [`Transport`]
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// Base URL of the modules API (e.g., "http://localhost:8000/v1/modules")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl HttpTransport {
    /// Create a transport with a default HTTP client
    ///
    /// # Example
    /// ```
    /// use modreg_client::HttpTransport;
    ///
    /// let transport = HttpTransport::new("http://localhost:8000/v1/modules/");
    /// assert_eq!(transport.base_url(), "http://localhost:8000/v1/modules");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a transport with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Resolve the modules API through the registry's discovery document
    ///
    /// # Arguments
    /// * `root` - Registry root URL (e.g., "https://registry.example.com")
    /// * `client` - HTTP client used for discovery and all later requests
    pub async fn discover(root: &str, client: Client) -> Result<Self, TransportError> {
        let root = root.trim_end_matches('/');
        let document = Self::with_client(root, client.clone())
            .get(DISCOVERY_PATH, &QueryParams::new())
            .await?;

        let base_url = ServiceDiscovery::decode(&document)
            .modules_url(root)
            .ok_or_else(|| TransportError::other("registry does not advertise modules.v1"))?;

        debug!("Discovered modules API at {}", base_url);
        Ok(Self::with_client(base_url, client))
    }

    /// Get the base URL of the modules API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Check the status and decode the body
    ///
    /// Empty bodies decode to `null`. A `204` carrying `X-Terraform-Get` becomes
    /// `{"download_url": <header>}`.
    async fn handle_response(response: Response) -> Result<Value, TransportError> {
        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .ok()
                .filter(|text| !text.trim().is_empty())
                .unwrap_or_else(|| reason(status));
            return Err(TransportError::with_status(status.as_u16(), error_text));
        }

        if status == StatusCode::NO_CONTENT {
            let location = response
                .headers()
                .get(TERRAFORM_GET_HEADER)
                .and_then(|value| value.to_str().ok());
            return Ok(match location {
                Some(location) => json!({ "download_url": location }),
                None => Value::Null,
            });
        }

        let body = response.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&body).map_err(|e| {
            TransportError::with_status(status.as_u16(), format!("invalid JSON response: {}", e))
        })
    }
}

fn reason(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("Unknown error")
        .to_string()
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, query: &QueryParams) -> Result<Value, TransportError> {
        let url = self.url(path);
        debug!("GET {} {:?}", url, query.as_pairs());

        let response = self
            .client
            .get(&url)
            .query(query.as_pairs())
            .send()
            .await?;

        Self::handle_response(response).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
        let url = self.url(path);
        debug!("POST {}", url);

        let response = self.client.post(&url).json(body).send().await?;

        Self::handle_response(response).await
    }
}
