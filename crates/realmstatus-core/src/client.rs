//! HTTP client for the realm status page
//!
//! This module provides a thin HTTP fetcher around `reqwest`. One call to
//! [`RealmStatusClient::fetch`] makes exactly one GET request; there is no
//! retry or backoff, failures surface immediately to the caller.

use std::time::Duration;

use crate::error::Result;

/// Realm status URL for US servers. The same page layout is used for
/// European servers under a different host.
pub const US_STATUS_URL: &str = "http://us.battle.net/wow/en/status";

/// Default User-Agent mimicking a modern browser
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration for the realm status HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Full URL of the status page to scrape (default: US servers)
    pub status_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            status_url: US_STATUS_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// HTTP client that retrieves the raw status page markup
pub struct RealmStatusClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// URL of the status page
    status_url: String,
}

impl RealmStatusClient {
    /// Create a new client pointed at the US status page.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration.
    ///
    /// Passing the URL here rather than hardcoding it lets catalogs for
    /// different regions coexist in one process.
    ///
    /// # Arguments
    /// * `config` - Client configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            status_url: config.status_url,
        })
    }

    /// Fetch the status page and return its body as a string.
    ///
    /// # Errors
    /// `RealmStatusError::Http` on a transport failure or a non-success
    /// status code. The caller decides whether to try again; this method
    /// never retries on its own.
    pub async fn fetch(&self) -> Result<String> {
        let response = self
            .client
            .get(&self.status_url)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }

    /// URL this client fetches from.
    pub fn status_url(&self) -> &str {
        &self.status_url
    }
}
