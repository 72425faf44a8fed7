//! Cache-aside character service
//!
//! Read path: cache -> persisted store -> NotFound. The service never
//! calls the upstream source synchronously; keeping the source out of
//! the read path bounds read latency, and freshness is the sync task's
//! job. The read path is the only writer of cache entries.

use lor_shared::Pagination;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::entities::Character;
use crate::errors::{CharacterError, DomainError};
use crate::repositories::CharacterRepository;

use super::cache::CharacterCache;

/// Character reads and favorites over a repository and a cache
pub struct CharacterService<R: CharacterRepository, C: CharacterCache> {
    repository: R,
    cache: C,
    /// TTL applied when the read path repopulates the cache
    cache_ttl: u64,
}

impl<R: CharacterRepository, C: CharacterCache> CharacterService<R, C> {
    /// Creates a new character service instance
    pub fn new(repository: R, cache: C, cache_ttl: u64) -> Self {
        Self {
            repository,
            cache,
            cache_ttl,
        }
    }

    /// Fetches a single character by upstream id, cache-aside
    ///
    /// Cache transport failures are logged and treated as misses; only a
    /// store failure surfaces to the caller.
    pub async fn get(&self, external_id: &str) -> Result<Character, DomainError> {
        match self.cache.get(external_id).await {
            Ok(Some(character)) => {
                debug!(external_id, "character cache hit");
                return Ok(character);
            }
            Ok(None) => {}
            Err(e) => warn!(external_id, error = %e, "character cache read failed"),
        }

        let character = self
            .repository
            .find_by_external_id(external_id)
            .await?
            .ok_or(CharacterError::NotFound)?;

        if let Err(e) = self.cache.put(&character, self.cache_ttl).await {
            warn!(external_id, error = %e, "character cache write failed");
        }

        Ok(character)
    }

    /// Lists characters from the persisted store only
    ///
    /// List views bypass the cache; caching paginated queries would
    /// fragment the cache across page/filter combinations.
    pub async fn list(
        &self,
        pagination: &Pagination,
        name_filter: Option<&str>,
    ) -> Result<(Vec<Character>, u64), DomainError> {
        let characters = self.repository.list(pagination, name_filter).await?;
        let total = self.repository.count(name_filter).await?;
        Ok((characters, total))
    }

    /// All characters the user has favorited
    pub async fn favorites(&self, user_id: Uuid) -> Result<Vec<Character>, DomainError> {
        self.repository.favorites(user_id).await
    }

    /// Adds a character to the user's favorites
    ///
    /// Idempotent: adding an already-favorited character is a no-op.
    /// Fails with `NotFound` when the character does not exist.
    pub async fn add_favorite(
        &self,
        user_id: Uuid,
        external_id: &str,
    ) -> Result<(), DomainError> {
        let character = self
            .repository
            .find_by_external_id(external_id)
            .await?
            .ok_or(CharacterError::NotFound)?;

        let inserted = self.repository.add_favorite(user_id, character.id).await?;
        if !inserted {
            debug!(%user_id, external_id, "favorite already present");
        }
        Ok(())
    }

    /// Removes a character from the user's favorites
    ///
    /// Fails with `NotFound` when the character does not exist, and with
    /// `FavoriteNotFound` when it was never favorited.
    pub async fn remove_favorite(
        &self,
        user_id: Uuid,
        external_id: &str,
    ) -> Result<(), DomainError> {
        let character = self
            .repository
            .find_by_external_id(external_id)
            .await?
            .ok_or(CharacterError::NotFound)?;

        let removed = self
            .repository
            .remove_favorite(user_id, character.id)
            .await?;
        if !removed {
            return Err(CharacterError::FavoriteNotFound.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::character::MockCharacterRepository;
    use crate::services::character::MockCharacterCache;
    use chrono::Utc;

    fn character(external_id: &str, name: &str) -> Character {
        Character {
            id: Uuid::new_v4(),
            external_id: external_id.to_string(),
            name: name.to_string(),
            wiki_url: None,
            race: Some("Hobbit".to_string()),
            birth: None,
            gender: None,
            death: None,
            hair: None,
            height: None,
            realm: None,
            spouse: None,
            last_synced_at: Utc::now(),
        }
    }

    fn service() -> (
        CharacterService<MockCharacterRepository, MockCharacterCache>,
        MockCharacterRepository,
        MockCharacterCache,
    ) {
        let repository = MockCharacterRepository::new();
        let cache = MockCharacterCache::new();
        let service = CharacterService::new(repository.clone(), cache.clone(), 3600);
        (service, repository, cache)
    }

    #[tokio::test]
    async fn get_repopulates_cache_and_second_read_skips_store() {
        let (service, repository, cache) = service();
        repository.seed(character("frodo-1", "Frodo Baggins")).await;

        let first = service.get("frodo-1").await.unwrap();
        assert_eq!(repository.find_calls(), 1);
        assert!(cache.contains("frodo-1").await);

        // Cache hit: the store is not consulted again
        let second = service.get("frodo-1").await.unwrap();
        assert_eq!(repository.find_calls(), 1);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn get_missing_character_is_not_found() {
        let (service, _, _) = service();
        let err = service.get("nobody").await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Character(CharacterError::NotFound)
        ));
    }

    #[tokio::test]
    async fn cache_outage_degrades_to_store_reads() {
        let (service, repository, cache) = service();
        repository.seed(character("sam-1", "Samwise Gamgee")).await;
        cache.set_failing(true).await;

        // Both reads land on the store, neither surfaces the cache error
        service.get("sam-1").await.unwrap();
        service.get("sam-1").await.unwrap();
        assert_eq!(repository.find_calls(), 2);
    }

    #[tokio::test]
    async fn list_does_not_touch_the_cache() {
        let (service, repository, cache) = service();
        repository.seed(character("frodo-1", "Frodo Baggins")).await;
        repository.seed(character("sam-1", "Samwise Gamgee")).await;

        let (characters, total) = service
            .list(&Pagination::new(1, 10), None)
            .await
            .unwrap();
        assert_eq!(characters.len(), 2);
        assert_eq!(total, 2);
        assert!(!cache.contains("frodo-1").await);
        assert!(!cache.contains("sam-1").await);
    }

    #[tokio::test]
    async fn list_filters_by_name() {
        let (service, repository, _) = service();
        repository.seed(character("frodo-1", "Frodo Baggins")).await;
        repository.seed(character("sam-1", "Samwise Gamgee")).await;

        let (characters, total) = service
            .list(&Pagination::new(1, 10), Some("gamgee"))
            .await
            .unwrap();
        assert_eq!(total, 1);
        assert_eq!(characters[0].name, "Samwise Gamgee");
    }

    #[tokio::test]
    async fn add_favorite_twice_is_a_noop() {
        let (service, repository, _) = service();
        repository.seed(character("frodo-1", "Frodo Baggins")).await;
        let user_id = Uuid::new_v4();

        service.add_favorite(user_id, "frodo-1").await.unwrap();
        service.add_favorite(user_id, "frodo-1").await.unwrap();

        let favorites = service.favorites(user_id).await.unwrap();
        assert_eq!(favorites.len(), 1);
    }

    #[tokio::test]
    async fn add_favorite_for_missing_character_fails() {
        let (service, _, _) = service();
        let err = service
            .add_favorite(Uuid::new_v4(), "nobody")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Character(CharacterError::NotFound)
        ));
    }

    #[tokio::test]
    async fn remove_missing_favorite_fails() {
        let (service, repository, _) = service();
        repository.seed(character("frodo-1", "Frodo Baggins")).await;

        let err = service
            .remove_favorite(Uuid::new_v4(), "frodo-1")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Character(CharacterError::FavoriteNotFound)
        ));
    }

    #[tokio::test]
    async fn remove_favorite_deletes_the_pair() {
        let (service, repository, _) = service();
        repository.seed(character("frodo-1", "Frodo Baggins")).await;
        let user_id = Uuid::new_v4();

        service.add_favorite(user_id, "frodo-1").await.unwrap();
        service.remove_favorite(user_id, "frodo-1").await.unwrap();
        assert!(service.favorites(user_id).await.unwrap().is_empty());
    }
}
