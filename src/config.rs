//! Configuration Module
//!
//! Handles loading server and client configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Optional JSON-lines journal backing the product store
    pub data_file: Option<PathBuf>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CATALOG_DATA_FILE` - Journal path (default: unset, in-memory only)
    pub fn from_env() -> Self {
        Self {
            server_port: env_or("SERVER_PORT", 3000),
            data_file: env::var("CATALOG_DATA_FILE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            data_file: None,
        }
    }
}

/// Client configuration for the fetch layer and list view.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the catalog server
    pub api_url: String,
    /// How long a fetched product stays valid in the local cache
    pub cache_ttl: Duration,
    /// Quiescence window for search input
    pub debounce: Duration,
    /// Page size used by the list view
    pub items_per_page: u64,
}

impl ClientConfig {
    /// Loads client configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `CATALOG_API_URL` - Server base URL (default: http://localhost:3000)
    /// - `CACHE_TTL_SECS` - Product cache expiration (default: 300)
    /// - `SEARCH_DEBOUNCE_MS` - Search quiescence window (default: 300)
    /// - `ITEMS_PER_PAGE` - List page size (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: env::var("CATALOG_API_URL").unwrap_or(defaults.api_url),
            cache_ttl: Duration::from_secs(env_or("CACHE_TTL_SECS", 300)),
            debounce: Duration::from_millis(env_or("SEARCH_DEBOUNCE_MS", 300)),
            items_per_page: env_or::<u64>("ITEMS_PER_PAGE", 10).max(1),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3000".to_string(),
            cache_ttl: Duration::from_secs(300),
            debounce: Duration::from_millis(300),
            items_per_page: 10,
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
