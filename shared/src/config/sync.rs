//! Background sync configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::env_parse_or;

/// Settings for the periodic character sync task
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SyncConfig {
    /// Interval between sync runs in seconds
    pub interval_secs: u64,

    /// Run an initial sync at startup when the characters table is empty
    pub run_on_startup: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            interval_secs: 3600, // hourly
            run_on_startup: true,
        }
    }
}

impl SyncConfig {
    /// Create from environment variables
    ///
    /// Reads `SYNC_INTERVAL_SECS` and `SYNC_RUN_ON_STARTUP`.
    pub fn from_env() -> Self {
        Self {
            interval_secs: env_parse_or("SYNC_INTERVAL_SECS", 3600),
            run_on_startup: env_parse_or("SYNC_RUN_ON_STARTUP", true),
        }
    }

    /// Interval between runs as a `Duration`
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}
