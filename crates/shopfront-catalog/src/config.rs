//! Catalog client configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. The defaults point at the public demo catalog, so a fresh
//! checkout works without any setup.

use std::env;
use std::time::Duration;

use thiserror::Error;

/// Base URL of the public demo product catalog.
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Per-request timeout applied when none is configured.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Catalog client configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog service (no trailing slash required).
    pub base_url: String,

    /// Timeout applied to each catalog request. The caller tolerates
    /// unbounded latency in principle; the timeout converts a hung
    /// connection into an `Unavailable` read instead of a stuck view.
    pub timeout: Duration,
}

impl CatalogConfig {
    /// Creates a configuration for the given base URL with the default
    /// timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        CatalogConfig {
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// ## Variables
    /// - `SHOPFRONT_CATALOG_URL` - catalog base URL (default: the public
    ///   demo catalog)
    /// - `SHOPFRONT_CATALOG_TIMEOUT_SECS` - per-request timeout in seconds
    pub fn load() -> Result<Self, ConfigError> {
        let base_url =
            env::var("SHOPFRONT_CATALOG_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_secs: u64 = env::var("SHOPFRONT_CATALOG_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("SHOPFRONT_CATALOG_TIMEOUT_SECS".to_string()))?;

        Ok(CatalogConfig {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig::new(DEFAULT_BASE_URL)
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable held a value that failed to parse.
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_demo_catalog() {
        let config = CatalogConfig::default();
        assert_eq!(config.base_url, "https://dummyjson.com");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_new_keeps_default_timeout() {
        let config = CatalogConfig::new("http://localhost:8080");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }
}
