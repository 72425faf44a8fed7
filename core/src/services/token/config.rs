//! Token service configuration

use lor_shared::config::AuthConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// HS256 signing secret
    pub jwt_secret: String,

    /// Access token lifetime in seconds
    pub access_token_ttl: i64,

    /// Refresh token lifetime in seconds
    pub refresh_token_ttl: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from("dev-secret-change-me"),
            access_token_ttl: 30 * 60,
            refresh_token_ttl: 24 * 3600,
        }
    }
}

impl From<&AuthConfig> for TokenServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            jwt_secret: config.jwt_secret.clone(),
            access_token_ttl: config.access_token_expiry_seconds(),
            refresh_token_ttl: config.refresh_token_expiry_seconds(),
        }
    }
}
