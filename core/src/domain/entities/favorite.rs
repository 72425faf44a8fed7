//! Favorite relation between a user and a character

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A (user, character) favorite pair
///
/// The pair is unique; rows are deleted when either side is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub user_id: Uuid,
    pub character_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    pub fn new(user_id: Uuid, character_id: Uuid) -> Self {
        Self {
            user_id,
            character_id,
            created_at: Utc::now(),
        }
    }
}
