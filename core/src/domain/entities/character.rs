//! Character entity sourced from the external Lord of the Rings API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A character record mirrored from the upstream API
///
/// Rows are written only by the sync task; the API surface treats
/// characters as read-only. `external_id` is the upstream identifier and
/// the key used for cache entries and public lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Internal unique identifier
    pub id: Uuid,

    /// Upstream identifier, unique
    pub external_id: String,

    /// Character name
    pub name: String,

    /// Link to the character's wiki page
    pub wiki_url: Option<String>,

    pub race: Option<String>,
    pub birth: Option<String>,
    pub gender: Option<String>,
    pub death: Option<String>,
    pub hair: Option<String>,
    pub height: Option<String>,
    pub realm: Option<String>,
    pub spouse: Option<String>,

    /// When the sync task last wrote this row
    pub last_synced_at: DateTime<Utc>,
}

impl Character {
    /// Cache key for this character's cache entry
    pub fn cache_key(external_id: &str) -> String {
        format!("character:{}", external_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_key_is_keyed_by_external_id() {
        assert_eq!(
            Character::cache_key("5cd99d4bde30eff6ebccfbbe"),
            "character:5cd99d4bde30eff6ebccfbbe"
        );
    }
}
