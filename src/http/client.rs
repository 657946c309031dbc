//! REST client
//!
//! Provides a thin HTTP client that handles:
//! - Base URL joining
//! - JSON response body parsing
//! - Error body decoding for non-2xx responses

use crate::config::ClientConfig;
use crate::decode::decode_error_body;
use crate::error::{Error, Result};
use crate::types::{JsonValue, StringMap};
use reqwest::header::ACCEPT;
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

/// Configuration for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Query parameters
    pub query: StringMap,
    /// Request headers
    pub headers: StringMap,
    /// Request body (JSON)
    pub body: Option<JsonValue>,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Add several query parameters
    #[must_use]
    pub fn queries(mut self, params: StringMap) -> Self {
        self.query.extend(params);
        self
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }
}

/// REST client for a JSON API
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    page_size: usize,
    default_headers: StringMap,
}

impl Client {
    /// Create a client for `base_url` with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::builder().base_url(base_url).build())
    }

    /// Create a client from a full configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;

        let mut client = Self::with_http_client(config.base_url, http)?;
        client.page_size = config.page_size;
        client.default_headers = config.default_headers;
        Ok(client)
    }

    /// Create a client on top of an existing reqwest client
    pub fn with_http_client(base_url: impl Into<String>, http: reqwest::Client) -> Result<Self> {
        let base_url = base_url.into();
        Url::parse(&base_url)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            page_size: crate::config::DEFAULT_PAGE_SIZE,
            default_headers: StringMap::new(),
        })
    }

    /// Set the page size used by paginated queries
    pub fn set_page_size(&mut self, page_size: usize) -> &mut Self {
        self.page_size = page_size;
        self
    }

    /// Page size used by paginated queries
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &reqwest::Client {
        &self.http
    }

    /// Execute a request and parse the JSON response into `T`
    pub async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        config: RequestConfig,
    ) -> Result<T> {
        let response = self.send(method, path, config).await?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|source| Error::Transport {
            status: Some(status),
            source,
        })?;
        serde_json::from_slice(&body).map_err(|source| Error::Decode { status, source })
    }

    /// Execute a request and discard the response body
    pub async fn execute_empty(
        &self,
        method: Method,
        path: &str,
        config: RequestConfig,
    ) -> Result<()> {
        self.send(method, path, config).await?;
        Ok(())
    }

    async fn send(&self, method: Method, path: &str, config: RequestConfig) -> Result<Response> {
        let url = self.build_url(path);
        debug!("{} {}", method, url);

        let mut req = self
            .http
            .request(method, &url)
            .header(ACCEPT, "application/json");

        for (key, value) in &self.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }
        for (key, value) in &config.headers {
            req = req.header(key.as_str(), value.as_str());
        }
        if !config.query.is_empty() {
            req = req.query(&config.query);
        }
        if let Some(ref body) = config.body {
            req = req.json(body);
        }

        let response = req.send().await.map_err(|source| Error::Transport {
            status: source.status().map(|s| s.as_u16()),
            source,
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                warn!(
                    "Failed to read error body from {} ({}): {}",
                    url,
                    status.as_u16(),
                    e
                );
                Default::default()
            }
        };
        let mut err = decode_error_body(&body);
        err.http_code = status.as_u16();
        warn!(
            "Request to {} failed with {}: {}",
            url,
            status.as_u16(),
            err.message
        );
        Err(Error::Api(err))
    }

    /// Build full URL from path
    pub(crate) fn build_url(&self, path: &str) -> String {
        let path = path.strip_prefix('/').unwrap_or(path);
        format!("{}/{}", self.base_url, path)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("page_size", &self.page_size)
            .field("default_headers", &self.default_headers)
            .finish_non_exhaustive()
    }
}
