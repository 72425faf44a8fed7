//! Redis-backed character cache.
//!
//! Entries are JSON-serialized characters keyed by
//! `character:{external_id}` (plus the configured prefix), expiring with
//! the configured TTL. A corrupt entry is dropped and reported as a
//! miss so the read path falls through to the database.

use async_trait::async_trait;
use tracing::warn;

use lor_core::domain::entities::Character;
use lor_core::errors::DomainError;
use lor_core::services::character::CharacterCache;

use super::redis_client::RedisClient;

/// CharacterCache implementation on top of `RedisClient`
#[derive(Clone)]
pub struct RedisCharacterCache {
    client: RedisClient,
}

impl RedisCharacterCache {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    fn key(&self, external_id: &str) -> String {
        self.client.config().make_key(&Character::cache_key(external_id))
    }
}

#[async_trait]
impl CharacterCache for RedisCharacterCache {
    async fn get(&self, external_id: &str) -> Result<Option<Character>, DomainError> {
        let key = self.key(external_id);
        let raw = self.client.get(&key).await.map_err(DomainError::from)?;

        match raw {
            Some(json) => match serde_json::from_str::<Character>(&json) {
                Ok(character) => Ok(Some(character)),
                Err(e) => {
                    warn!("Dropping corrupt cache entry '{}': {}", key, e);
                    let _ = self.client.delete(&key).await;
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    async fn put(&self, character: &Character, ttl_seconds: u64) -> Result<(), DomainError> {
        let key = self.key(&character.external_id);
        let json = serde_json::to_string(character).map_err(|e| DomainError::Internal {
            message: format!("Failed to serialize character: {}", e),
        })?;

        self.client
            .set_with_expiry(&key, &json, ttl_seconds)
            .await
            .map_err(DomainError::from)
    }

    async fn invalidate(&self, external_id: &str) -> Result<(), DomainError> {
        let key = self.key(external_id);
        self.client.delete(&key).await.map_err(DomainError::from)?;
        Ok(())
    }
}
