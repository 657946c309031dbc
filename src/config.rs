//! Client configuration
//!
//! Configuration can be built in code with [`ClientConfig::builder`] or
//! loaded from YAML:
//!
//! ```yaml
//! base_url: https://api.example.com/v1
//! page_size: 50
//! timeout_secs: 10
//! default_headers:
//!   X-Tenant: acme
//! ```

use crate::error::Result;
use crate::types::StringMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default number of elements requested per page
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Configuration for the REST client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL that request paths are joined to
    pub base_url: String,

    /// Page size used by paginated GET requests
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Request timeout
    #[serde(
        default = "default_timeout",
        rename = "timeout_secs",
        with = "duration_secs"
    )]
    pub timeout: Duration,

    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Headers sent with every request
    #[serde(default)]
    pub default_headers: StringMap,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_user_agent() -> String {
    format!("paged-rest-client/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            page_size: default_page_size(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
            default_headers: StringMap::new(),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Parse a config from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }
}

/// Builder for client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the page size
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.config.page_size = page_size;
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
