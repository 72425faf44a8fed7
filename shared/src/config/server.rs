//! HTTP server configuration

use serde::{Deserialize, Serialize};

use super::{env_or, env_parse_or};

/// Settings for the actix-web server
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Address the server binds to
    pub host: String,

    /// Port the server listens on
    pub port: u16,

    /// Number of actix worker threads (0 = one per logical CPU)
    #[serde(default)]
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
            workers: 0,
        }
    }
}

impl ServerConfig {
    /// Create from environment variables
    ///
    /// Reads `SERVER_HOST`, `SERVER_PORT` and `SERVER_WORKERS`.
    pub fn from_env() -> Self {
        Self {
            host: env_or("SERVER_HOST", "127.0.0.1"),
            port: env_parse_or("SERVER_PORT", 8080),
            workers: env_parse_or("SERVER_WORKERS", 0),
        }
    }

    /// Bind address in `host:port` form
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
