//! Configuration management
//!
//! Every section is an independent struct with a `from_env` constructor so
//! the layers that only need one section (e.g. the infra crate needing
//! `DatabaseConfig`) can build it without dragging the rest along.
//! `AppConfig::from_env` aggregates all of them for the server binary.

pub mod auth;
pub mod cache;
pub mod database;
pub mod external_api;
pub mod server;
pub mod sync;

pub use auth::AuthConfig;
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use external_api::ExternalApiConfig;
pub use server::ServerConfig;
pub use sync::SyncConfig;

/// Complete application configuration, assembled from environment variables
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server settings
    pub server: ServerConfig,
    /// Postgres connection settings
    pub database: DatabaseConfig,
    /// Redis cache settings
    pub cache: CacheConfig,
    /// JWT and password settings
    pub auth: AuthConfig,
    /// External character source settings
    pub external_api: ExternalApiConfig,
    /// Background sync settings
    pub sync: SyncConfig,
}

impl AppConfig {
    /// Load the full configuration from the process environment
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(),
            auth: AuthConfig::from_env(),
            external_api: ExternalApiConfig::from_env(),
            sync: SyncConfig::from_env(),
        }
    }
}

/// Read an environment variable, falling back to a default
pub(crate) fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read and parse an environment variable, falling back to a default
pub(crate) fn env_parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
