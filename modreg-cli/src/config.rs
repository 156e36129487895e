//! Configuration module
//!
//! Handles CLI configuration: where the registry lives and how to reach it.

use anyhow::{Context, Result};
use modreg_client::{HttpTransport, ModuleCatalog};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Default modules API location
pub const DEFAULT_REGISTRY_URL: &str = "http://localhost:8000/v1/modules";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Modules API base URL, or the registry root when `discover` is set
    pub registry_url: String,

    /// Per-request timeout
    pub timeout: Duration,

    /// Resolve the modules API through `/.well-known/terraform.json`
    pub discover: bool,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(registry_url: impl Into<String>) -> Self {
        Self {
            registry_url: registry_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            discover: false,
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.registry_url.is_empty() {
            anyhow::bail!("registry_url cannot be empty");
        }

        if !self.registry_url.starts_with("http://") && !self.registry_url.starts_with("https://")
        {
            anyhow::bail!("registry_url must start with http:// or https://");
        }

        if self.timeout.is_zero() {
            anyhow::bail!("timeout must be greater than 0");
        }

        Ok(())
    }

    /// Build the HTTP client shared by every request
    pub fn http_client(&self) -> Result<Client> {
        Client::builder()
            .timeout(self.timeout)
            .build()
            .context("Failed to build HTTP client")
    }

    /// Build the transport, running service discovery if requested
    pub async fn transport(&self) -> Result<HttpTransport> {
        let client = self.http_client()?;

        if !self.discover {
            return Ok(HttpTransport::with_client(&self.registry_url, client));
        }

        let transport = HttpTransport::discover(&self.registry_url, client)
            .await
            .with_context(|| format!("Service discovery failed for {}", self.registry_url))?;
        debug!("Using modules API at {}", transport.base_url());
        Ok(transport)
    }

    /// Build the catalog every command goes through
    pub async fn catalog(&self) -> Result<ModuleCatalog> {
        Ok(ModuleCatalog::new(self.transport().await?))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_REGISTRY_URL)
    }
}
