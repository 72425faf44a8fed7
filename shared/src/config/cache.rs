//! Cache configuration module

use serde::{Deserialize, Serialize};

use super::{env_or, env_parse_or};

/// Redis cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL
    pub url: String,

    /// Connection timeout in seconds
    pub connection_timeout: u64,

    /// Default TTL for character cache entries in seconds
    #[serde(default = "default_ttl")]
    pub character_ttl: u64,

    /// Optional prefix applied to every cache key
    #[serde(default)]
    pub key_prefix: Option<String>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://localhost:6379"),
            connection_timeout: 5,
            character_ttl: default_ttl(),
            key_prefix: None,
        }
    }
}

impl CacheConfig {
    /// Create from environment variables
    ///
    /// Reads `REDIS_URL`, `REDIS_CONNECTION_TIMEOUT` and
    /// `CACHE_CHARACTER_TTL`.
    pub fn from_env() -> Self {
        Self {
            url: env_or("REDIS_URL", "redis://localhost:6379"),
            connection_timeout: env_parse_or("REDIS_CONNECTION_TIMEOUT", 5),
            character_ttl: env_parse_or("CACHE_CHARACTER_TTL", default_ttl()),
            key_prefix: std::env::var("CACHE_KEY_PREFIX").ok(),
        }
    }

    /// Create a new cache configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the key prefix for all cache keys
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }

    /// Generate a cache key with the configured prefix
    pub fn make_key(&self, key: &str) -> String {
        match &self.key_prefix {
            Some(prefix) => format!("{}:{}", prefix, key),
            None => key.to_string(),
        }
    }
}

fn default_ttl() -> u64 {
    3600 // 1 hour
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_key_applies_prefix() {
        let config = CacheConfig::new("redis://localhost").with_prefix("lor");
        assert_eq!(config.make_key("character:abc"), "lor:character:abc");
    }

    #[test]
    fn make_key_without_prefix_is_identity() {
        let config = CacheConfig::default();
        assert_eq!(config.make_key("character:abc"), "character:abc");
    }
}
