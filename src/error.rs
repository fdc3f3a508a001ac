//! Error types for droplet-kit
//!
//! Every public API returns `Result<T, Error>` where Error is defined here.
//! Provider and transport failures are surfaced as-is; the pagination and
//! action-waiting layers add their own distinct variants.

use thiserror::Error;

/// The main error type for droplet-kit
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Authentication Errors
    // ============================================================================
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Rate limited, retry after {retry_after_seconds}s")]
    RateLimited { retry_after_seconds: u64 },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Pagination exceeded bound: more than {limit} {unit}")]
    PaginationBoundExceeded { limit: usize, unit: BoundUnit },

    #[error("Pagination cycle: provider pointed back at page {page}")]
    PaginationCycle { page: u32 },

    // ============================================================================
    // Action Errors
    // ============================================================================
    #[error("Action {action_id} finished with status '{status}'")]
    ActionFailed { action_id: u64, status: String },

    #[error("Gave up waiting for action after {waited_ms}ms")]
    WaitTimeout { waited_ms: u64 },

    /// The create request succeeded, so the droplet exists (and is billed),
    /// but waiting for it to become active did not.
    #[error("Droplet {droplet_id} was created but did not become active: {source}")]
    DropletNotSettled { droplet_id: u64, source: Box<Error> },

    // ============================================================================
    // Data Processing Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

/// Which pagination bound was exceeded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundUnit {
    /// Number of page requests
    Pages,
    /// Number of accumulated items
    Items,
}

impl std::fmt::Display for BoundUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pages => f.write_str("pages"),
            Self::Items => f.write_str("items"),
        }
    }
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a page bound error
    pub fn too_many_pages(limit: usize) -> Self {
        Self::PaginationBoundExceeded {
            limit,
            unit: BoundUnit::Pages,
        }
    }

    /// Create an item bound error
    pub fn too_many_items(limit: usize) -> Self {
        Self::PaginationBoundExceeded {
            limit,
            unit: BoundUnit::Items,
        }
    }

    /// Create an action failure error
    pub fn action_failed(action_id: u64, status: impl Into<String>) -> Self {
        Self::ActionFailed {
            action_id,
            status: status.into(),
        }
    }

    /// Check if this error is transient at the transport level.
    ///
    /// This is the only retry rule; the HTTP client consults it for every
    /// failed attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(e) => e.is_connect() || e.is_timeout(),
            Error::RateLimited { .. } | Error::Timeout { .. } => true,
            Error::HttpStatus { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }

    /// Check if the provider reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::HttpStatus { status: 404, .. })
    }
}

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504 | 520..=524)
}

/// Result type alias for droplet-kit
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::missing_field("token");
        assert_eq!(err.to_string(), "Missing required config field: token");

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");
    }

    #[test]
    fn test_bound_error_display() {
        assert_eq!(
            Error::too_many_pages(1000).to_string(),
            "Pagination exceeded bound: more than 1000 pages"
        );
        assert_eq!(
            Error::too_many_items(50).to_string(),
            "Pagination exceeded bound: more than 50 items"
        );
        assert_eq!(
            Error::PaginationCycle { page: 3 }.to_string(),
            "Pagination cycle: provider pointed back at page 3"
        );
    }

    #[test]
    fn test_action_error_display() {
        let err = Error::action_failed(42, "errored");
        assert_eq!(err.to_string(), "Action 42 finished with status 'errored'");
    }

    #[test]
    fn test_is_retryable() {
        assert!(Error::RateLimited {
            retry_after_seconds: 60
        }
        .is_retryable());
        assert!(Error::Timeout { timeout_ms: 1000 }.is_retryable());
        assert!(Error::http_status(429, "").is_retryable());
        assert!(Error::http_status(500, "").is_retryable());
        assert!(Error::http_status(503, "").is_retryable());

        assert!(!Error::http_status(400, "").is_retryable());
        assert!(!Error::http_status(401, "").is_retryable());
        assert!(!Error::http_status(404, "").is_retryable());
        assert!(!Error::config("test").is_retryable());
        assert!(!Error::too_many_pages(10).is_retryable());
        assert!(Error::http_status(522, "").is_retryable());
        assert!(!Error::http_status(501, "").is_retryable());
    }

    #[test]
    fn test_droplet_not_settled_keeps_cause() {
        let err = Error::DropletNotSettled {
            droplet_id: 7,
            source: Box::new(Error::WaitTimeout { waited_ms: 10 }),
        };
        assert_eq!(
            err.to_string(),
            "Droplet 7 was created but did not become active: Gave up waiting for action after 10ms"
        );
        let cause = std::error::Error::source(&err).unwrap();
        assert_eq!(cause.to_string(), "Gave up waiting for action after 10ms");
    }

    #[test]
    fn test_is_not_found() {
        assert!(Error::http_status(404, "").is_not_found());
        assert!(!Error::http_status(500, "").is_not_found());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
