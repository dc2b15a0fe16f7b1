//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::cache::DEFAULT_TTL_MS;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Origin share links point at when a request does not supply one
    pub public_base_url: String,
    /// Default TTL in milliseconds for cache entries without explicit TTL
    pub default_ttl_ms: u64,
    /// Background sweep interval in milliseconds, 0 disables the sweep
    pub cleanup_interval_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `PUBLIC_BASE_URL` - Share link origin (default: http://localhost:3000)
    /// - `DEFAULT_TTL_MS` - Default cache TTL in milliseconds (default: 60000)
    /// - `CLEANUP_INTERVAL_MS` - Sweep frequency in milliseconds (default: 0, disabled)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            public_base_url: env::var("PUBLIC_BASE_URL")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.public_base_url),
            default_ttl_ms: parse_var("DEFAULT_TTL_MS").unwrap_or(defaults.default_ttl_ms),
            cleanup_interval_ms: parse_var("CLEANUP_INTERVAL_MS")
                .unwrap_or(defaults.cleanup_interval_ms),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            public_base_url: "http://localhost:3000".to_string(),
            default_ttl_ms: DEFAULT_TTL_MS,
            cleanup_interval_ms: 0,
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.public_base_url, "http://localhost:3000");
        assert_eq!(config.default_ttl_ms, 60_000);
        assert_eq!(config.cleanup_interval_ms, 0);
    }

    #[test]
    fn test_config_from_env() {
        // Single test touches the environment to avoid races between tests
        env::remove_var("SERVER_PORT");
        env::remove_var("PUBLIC_BASE_URL");
        env::remove_var("DEFAULT_TTL_MS");
        env::remove_var("CLEANUP_INTERVAL_MS");

        let config = Config::from_env();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.public_base_url, "http://localhost:3000");
        assert_eq!(config.default_ttl_ms, 60_000);
        assert_eq!(config.cleanup_interval_ms, 0);

        env::set_var("PUBLIC_BASE_URL", "https://vaults.example.com/");
        env::set_var("DEFAULT_TTL_MS", "not-a-number");
        env::set_var("CLEANUP_INTERVAL_MS", "5000");

        let config = Config::from_env();
        assert_eq!(config.public_base_url, "https://vaults.example.com");
        assert_eq!(config.default_ttl_ms, 60_000);
        assert_eq!(config.cleanup_interval_ms, 5_000);

        env::remove_var("PUBLIC_BASE_URL");
        env::remove_var("DEFAULT_TTL_MS");
        env::remove_var("CLEANUP_INTERVAL_MS");
    }
}
