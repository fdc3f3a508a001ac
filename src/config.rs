//! Client configuration
//!
//! Settings can come from a YAML file, with the access token optionally
//! taken from the environment:
//!
//! ```yaml
//! api_url: https://api.digitalocean.com
//! token: dop_v1_...
//! http:
//!   timeout_secs: 30
//!   max_retries: 3
//!   backoff: exponential
//! pagination:
//!   per_page: 200
//!   max_pages: 1000
//! wait:
//!   poll_interval_ms: 5000
//!   max_wait_secs: 600
//! ```

use crate::actions::WaitConfig;
use crate::auth::AuthConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, DEFAULT_API_URL};
use crate::pagination::{PaginationConfig, DEFAULT_MAX_PAGES, MAX_PER_PAGE};
use crate::types::BackoffType;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable consulted when no token is configured
pub const TOKEN_ENV: &str = "DIGITALOCEAN_ACCESS_TOKEN";

// ============================================================================
// Top-Level Client Config
// ============================================================================

/// Complete client configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Provider API root
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Personal access token
    #[serde(default)]
    pub token: Option<String>,

    /// Transport settings
    #[serde(default)]
    pub http: HttpSettings,

    /// Listing bounds
    #[serde(default)]
    pub pagination: PaginationSettings,

    /// Action polling for `create --wait`
    #[serde(default)]
    pub wait: WaitSettings,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            token: None,
            http: HttpSettings::default(),
            pagination: PaginationSettings::default(),
            wait: WaitSettings::default(),
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_url", &self.api_url)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("http", &self.http)
            .field("pagination", &self.pagination)
            .field("wait", &self.wait)
            .finish()
    }
}

// ============================================================================
// Sections
// ============================================================================

/// HTTP transport settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSettings {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,

    #[serde(default = "default_max_backoff_ms")]
    pub max_backoff_ms: u64,

    #[serde(default)]
    pub backoff: BackoffType,

    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_initial_backoff_ms() -> u64 {
    100
}

fn default_max_backoff_ms() -> u64 {
    30_000
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            initial_backoff_ms: default_initial_backoff_ms(),
            max_backoff_ms: default_max_backoff_ms(),
            backoff: BackoffType::default(),
            user_agent: None,
        }
    }
}

/// Pagination settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationSettings {
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    #[serde(default = "default_max_pages")]
    pub max_pages: usize,

    #[serde(default)]
    pub max_items: Option<usize>,
}

fn default_per_page() -> u32 {
    MAX_PER_PAGE
}

fn default_max_pages() -> usize {
    DEFAULT_MAX_PAGES
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
            max_pages: default_max_pages(),
            max_items: None,
        }
    }
}

/// Action wait settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitSettings {
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    #[serde(default = "default_max_wait_secs")]
    pub max_wait_secs: u64,

    #[serde(default = "default_max_poll_failures")]
    pub max_poll_failures: u32,
}

fn default_poll_interval_ms() -> u64 {
    5_000
}

fn default_max_wait_secs() -> u64 {
    600
}

fn default_max_poll_failures() -> u32 {
    3
}

impl Default for WaitSettings {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            max_wait_secs: default_max_wait_secs(),
            max_poll_failures: default_max_poll_failures(),
        }
    }
}

// ============================================================================
// Loading and Conversion
// ============================================================================

impl ClientConfig {
    /// Load and validate a YAML config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate YAML config
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Fill in the token from `DIGITALOCEAN_ACCESS_TOKEN` if none is set
    #[must_use]
    pub fn with_env_token(self) -> Self {
        let from_env = std::env::var(TOKEN_ENV).ok();
        self.with_fallback_token(from_env)
    }

    /// Fill in the token from `fallback` if none is set
    #[must_use]
    pub fn with_fallback_token(mut self, fallback: Option<String>) -> Self {
        if self.token.as_deref().map_or(true, |t| t.trim().is_empty()) {
            self.token = fallback.filter(|t| !t.trim().is_empty());
        }
        self
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.api_url)
            .map_err(|e| Error::invalid_value("api_url", e.to_string()))?;

        if self.pagination.per_page == 0 || self.pagination.per_page > MAX_PER_PAGE {
            return Err(Error::invalid_value(
                "pagination.per_page",
                format!("must be between 1 and {MAX_PER_PAGE}"),
            ));
        }
        if self.pagination.max_pages == 0 {
            return Err(Error::invalid_value(
                "pagination.max_pages",
                "must be at least 1",
            ));
        }
        if self.wait.poll_interval_ms == 0 {
            return Err(Error::invalid_value(
                "wait.poll_interval_ms",
                "must be greater than 0",
            ));
        }
        if self.http.timeout_secs == 0 {
            return Err(Error::invalid_value(
                "http.timeout_secs",
                "must be greater than 0",
            ));
        }
        Ok(())
    }

    /// Credentials for the transport
    pub fn auth_config(&self) -> Result<AuthConfig> {
        match self.token.as_deref() {
            Some(token) => AuthConfig::bearer(token),
            None => Err(Error::missing_field("token")),
        }
    }

    /// Transport configuration
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(&self.api_url)
            .timeout(Duration::from_secs(self.http.timeout_secs))
            .max_retries(self.http.max_retries)
            .backoff(
                self.http.backoff,
                Duration::from_millis(self.http.initial_backoff_ms),
                Duration::from_millis(self.http.max_backoff_ms),
            );
        if let Some(agent) = &self.http.user_agent {
            builder = builder.user_agent(agent);
        }
        builder.build()
    }

    /// Paginator bounds
    pub fn pagination_config(&self) -> PaginationConfig {
        let config = PaginationConfig::with_per_page(self.pagination.per_page)
            .max_pages(self.pagination.max_pages);
        match self.pagination.max_items {
            Some(max_items) => config.max_items(max_items),
            None => config,
        }
    }

    /// Action polling configuration
    pub fn wait_config(&self) -> WaitConfig {
        WaitConfig {
            poll_interval: Duration::from_millis(self.wait.poll_interval_ms),
            max_wait: Duration::from_secs(self.wait.max_wait_secs),
            max_poll_failures: self.wait.max_poll_failures,
        }
    }
}
