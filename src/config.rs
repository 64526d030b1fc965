//! Configuration for the trending feed
//!
//! A `FeedConfig` describes everything needed to reach the remote image
//! API: base URL, endpoint path, API key, page sizes, and HTTP client
//! settings. Configs can be built programmatically or loaded from YAML.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Complete feed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Base URL of the image API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the trending endpoint, relative to `base_url`
    #[serde(default = "default_trending_path")]
    pub trending_path: String,

    /// Static API key, sent as the `api_key` query parameter
    pub api_key: String,

    /// Page size for the initial load
    #[serde(default = "default_page_size")]
    pub initial_page_size: u32,

    /// Page size for every subsequent load
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent string for outgoing requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://api.giphy.com".to_string()
}

fn default_trending_path() -> String {
    "/v1/gifs/trending".to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("trendgrid/{}", env!("CARGO_PKG_VERSION"))
}

impl FeedConfig {
    /// Create a config with defaults for the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            trending_path: default_trending_path(),
            api_key: api_key.into(),
            initial_page_size: DEFAULT_PAGE_SIZE,
            page_size: DEFAULT_PAGE_SIZE,
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }

    /// Create a config builder
    pub fn builder(api_key: impl Into<String>) -> FeedConfigBuilder {
        FeedConfigBuilder {
            config: Self::new(api_key),
        }
    }

    /// Load a config from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&contents)
    }

    /// Parse a config from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.base_url)?;
        if self.api_key.is_empty() {
            return Err(Error::missing_field("api_key"));
        }
        if self.initial_page_size == 0 || self.page_size == 0 {
            return Err(Error::config("page sizes must be positive"));
        }
        Ok(())
    }

    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Builder for feed config
#[derive(Debug)]
pub struct FeedConfigBuilder {
    config: FeedConfig,
}

impl FeedConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the trending endpoint path
    pub fn trending_path(mut self, path: impl Into<String>) -> Self {
        self.config.trending_path = path.into();
        self
    }

    /// Set the initial page size
    pub fn initial_page_size(mut self, size: u32) -> Self {
        self.config.initial_page_size = size;
        self
    }

    /// Set the pagination page size
    pub fn page_size(mut self, size: u32) -> Self {
        self.config.page_size = size;
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout_secs = timeout.as_secs();
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Validate and build the config
    pub fn build(self) -> Result<FeedConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
