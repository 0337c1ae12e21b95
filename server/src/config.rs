//! Configuration management for the server.

use std::env;
use std::time::Duration;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Base URL of the artwork catalog API
    pub catalog_url: String,
    /// Page size for new sessions
    pub default_page_size: u64,
    /// Timeout for a single catalog request
    pub catalog_timeout: Duration,
    /// Sessions idle longer than this are dropped
    pub session_ttl: chrono::Duration,
}

/// Catalog used when `CATALOG_URL` is not set.
pub const DEFAULT_CATALOG_URL: &str = "https://api.artic.edu/api/v1";

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let catalog_url = lookup("CATALOG_URL").unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string());

        let default_page_size = lookup("DEFAULT_PAGE_SIZE")
            .unwrap_or_else(|| "12".to_string())
            .parse::<u64>()
            .ok()
            .filter(|size| *size > 0)
            .ok_or(ConfigError::InvalidPageSize)?;

        let catalog_timeout = lookup("CATALOG_TIMEOUT_SECS")
            .unwrap_or_else(|| "10".to_string())
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .ok_or(ConfigError::InvalidTimeout)?;

        let session_ttl = lookup("SESSION_TTL_SECS")
            .unwrap_or_else(|| "1800".to_string())
            .parse::<i64>()
            .ok()
            .filter(|secs| *secs > 0)
            .map(chrono::Duration::seconds)
            .ok_or(ConfigError::InvalidSessionTtl)?;

        Ok(Self {
            host,
            port,
            catalog_url,
            default_page_size,
            catalog_timeout,
            session_ttl,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value")]
    InvalidPort,

    #[error("DEFAULT_PAGE_SIZE must be a positive integer")]
    InvalidPageSize,

    #[error("CATALOG_TIMEOUT_SECS must be a positive integer")]
    InvalidTimeout,

    #[error("SESSION_TTL_SECS must be a positive integer")]
    InvalidSessionTtl,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.catalog_url, DEFAULT_CATALOG_URL);
        assert_eq!(config.default_page_size, 12);
        assert_eq!(config.catalog_timeout, Duration::from_secs(10));
        assert_eq!(config.session_ttl, chrono::Duration::minutes(30));
    }

    #[test]
    fn overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("CATALOG_URL", "http://localhost:9000"),
            ("DEFAULT_PAGE_SIZE", "25"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.catalog_url, "http://localhost:9000");
        assert_eq!(config.default_page_size, 25);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            config_from(&[("PORT", "http")]),
            Err(ConfigError::InvalidPort)
        ));
        assert!(matches!(
            config_from(&[("DEFAULT_PAGE_SIZE", "0")]),
            Err(ConfigError::InvalidPageSize)
        ));
        assert!(matches!(
            config_from(&[("CATALOG_TIMEOUT_SECS", "soon")]),
            Err(ConfigError::InvalidTimeout)
        ));
        assert!(matches!(
            config_from(&[("SESSION_TTL_SECS", "-1")]),
            Err(ConfigError::InvalidSessionTtl)
        ));
    }
}
