//! Error types for steam_sync

use thiserror::Error;

/// Problems with the startup configuration. Always fatal, raised before any request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Required variable is unset or empty
    #[error("Missing required configuration value: {0}")]
    Missing(&'static str),
    /// Variable is set but cannot be interpreted
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Unified error type for steam_sync operations
#[derive(Debug, Error)]
pub enum SyncError {
    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(reqwest::Error),
    /// Failed to parse JSON response
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// HTTP error status code without a usable body
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),
    /// Notion rejected a request
    #[error("Notion API error ({status}): {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
}

// Steam requests carry the API key in the query string, so the URL is
// stripped before the error can reach a log line.
impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        SyncError::Network(err.without_url())
    }
}

/// Result alias for steam_sync operations
pub type Result<T> = std::result::Result<T, SyncError>;
