//! Auth service configuration

use lor_shared::config::AuthConfig;

/// Configuration for the auth service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// bcrypt cost factor for password hashing
    pub bcrypt_cost: u32,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self { bcrypt_cost: 12 }
    }
}

impl From<&AuthConfig> for AuthServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            bcrypt_cost: config.bcrypt_cost,
        }
    }
}
