//! Character cache trait
//!
//! One entry per character keyed by `external_id`, with a TTL. Entries
//! past their TTL are simply absent; the cache never serves stale data
//! as valid. Only the read path writes entries; the sync task is limited
//! to invalidation.

use async_trait::async_trait;

use crate::domain::entities::Character;
use crate::errors::DomainError;

/// TTL-capable key-value cache of character records
#[async_trait]
pub trait CharacterCache: Send + Sync {
    /// Look up a character by its upstream identifier
    async fn get(&self, external_id: &str) -> Result<Option<Character>, DomainError>;

    /// Store a character with the given TTL
    async fn put(&self, character: &Character, ttl_seconds: u64) -> Result<(), DomainError>;

    /// Delete a character's cache entry, if present
    async fn invalidate(&self, external_id: &str) -> Result<(), DomainError>;
}

#[cfg(test)]
pub mod mock {
    //! Mock implementation of CharacterCache for testing

    use std::collections::HashMap;
    use std::sync::Arc;

    use async_trait::async_trait;
    use tokio::sync::RwLock;

    use super::CharacterCache;
    use crate::domain::entities::Character;
    use crate::errors::DomainError;

    /// In-memory character cache for tests (TTL recorded, never enforced)
    #[derive(Clone, Default)]
    pub struct MockCharacterCache {
        entries: Arc<RwLock<HashMap<String, Character>>>,
        fail: Arc<RwLock<bool>>,
    }

    impl MockCharacterCache {
        pub fn new() -> Self {
            Self::default()
        }

        /// Make every cache operation fail, simulating a Redis outage
        pub async fn set_failing(&self, fail: bool) {
            *self.fail.write().await = fail;
        }

        /// Whether an entry exists for the given external id
        pub async fn contains(&self, external_id: &str) -> bool {
            self.entries.read().await.contains_key(external_id)
        }

        async fn check_failure(&self) -> Result<(), DomainError> {
            if *self.fail.read().await {
                return Err(DomainError::CacheUnavailable {
                    message: "mock cache set to fail".to_string(),
                });
            }
            Ok(())
        }
    }

    #[async_trait]
    impl CharacterCache for MockCharacterCache {
        async fn get(&self, external_id: &str) -> Result<Option<Character>, DomainError> {
            self.check_failure().await?;
            Ok(self.entries.read().await.get(external_id).cloned())
        }

        async fn put(
            &self,
            character: &Character,
            _ttl_seconds: u64,
        ) -> Result<(), DomainError> {
            self.check_failure().await?;
            self.entries
                .write()
                .await
                .insert(character.external_id.clone(), character.clone());
            Ok(())
        }

        async fn invalidate(&self, external_id: &str) -> Result<(), DomainError> {
            self.check_failure().await?;
            self.entries.write().await.remove(external_id);
            Ok(())
        }
    }
}
