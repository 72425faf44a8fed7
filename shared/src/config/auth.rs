//! Authentication configuration module

use serde::{Deserialize, Serialize};

use super::{env_or, env_parse_or};

/// JWT and password hashing settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Secret used to sign and verify HS256 tokens
    pub jwt_secret: String,

    /// Access token lifetime in minutes
    pub access_token_expiry_minutes: i64,

    /// Refresh token lifetime in hours
    pub refresh_token_expiry_hours: i64,

    /// bcrypt cost factor for password hashing
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from("dev-secret-change-me"),
            access_token_expiry_minutes: 30,
            refresh_token_expiry_hours: 24,
            bcrypt_cost: 12,
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    ///
    /// Reads `JWT_SECRET`, `ACCESS_TOKEN_EXPIRY_MINUTES`,
    /// `REFRESH_TOKEN_EXPIRY_HOURS` and `BCRYPT_COST`.
    pub fn from_env() -> Self {
        Self {
            jwt_secret: env_or("JWT_SECRET", "dev-secret-change-me"),
            access_token_expiry_minutes: env_parse_or("ACCESS_TOKEN_EXPIRY_MINUTES", 30),
            refresh_token_expiry_hours: env_parse_or("REFRESH_TOKEN_EXPIRY_HOURS", 24),
            bcrypt_cost: env_parse_or("BCRYPT_COST", 12),
        }
    }

    /// Access token lifetime in seconds
    pub fn access_token_expiry_seconds(&self) -> i64 {
        self.access_token_expiry_minutes * 60
    }

    /// Refresh token lifetime in seconds
    pub fn refresh_token_expiry_seconds(&self) -> i64 {
        self.refresh_token_expiry_hours * 3600
    }
}
