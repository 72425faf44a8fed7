//! External character source configuration

use serde::{Deserialize, Serialize};

use super::{env_or, env_parse_or};

/// Settings for the upstream Lord of the Rings API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExternalApiConfig {
    /// Base URL of the upstream API, e.g. `https://the-one-api.dev/v2`
    pub base_url: String,

    /// Bearer API key for the upstream API
    pub api_key: String,

    /// Page size used when paginating the character listing
    pub page_size: u32,

    /// Per-request timeout in seconds
    pub request_timeout: u64,

    /// Maximum retries for a failed page fetch
    pub max_retries: u32,

    /// Base delay between retries in milliseconds (doubles per attempt)
    pub retry_delay_ms: u64,
}

impl Default for ExternalApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("https://the-one-api.dev/v2"),
            api_key: String::new(),
            page_size: 100,
            request_timeout: 10,
            max_retries: 3,
            retry_delay_ms: 500,
        }
    }
}

impl ExternalApiConfig {
    /// Create from environment variables
    ///
    /// Reads `LOR_API_BASE_URL`, `LOR_API_KEY`, `LOR_API_PAGE_SIZE`,
    /// `LOR_API_TIMEOUT`, `LOR_API_MAX_RETRIES` and `LOR_API_RETRY_DELAY_MS`.
    pub fn from_env() -> Self {
        Self {
            base_url: env_or("LOR_API_BASE_URL", "https://the-one-api.dev/v2"),
            api_key: env_or("LOR_API_KEY", ""),
            page_size: env_parse_or("LOR_API_PAGE_SIZE", 100),
            request_timeout: env_parse_or("LOR_API_TIMEOUT", 10),
            max_retries: env_parse_or("LOR_API_MAX_RETRIES", 3),
            retry_delay_ms: env_parse_or("LOR_API_RETRY_DELAY_MS", 500),
        }
    }
}
