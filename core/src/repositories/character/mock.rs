//! Mock implementation of CharacterRepository for testing

use async_trait::async_trait;
use lor_shared::Pagination;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Character;
use crate::errors::DomainError;

use super::r#trait::CharacterRepository;

/// In-memory character repository for tests
///
/// Counts `find_by_external_id` calls so cache-aside tests can assert
/// that cache hits skip the store.
#[derive(Clone, Default)]
pub struct MockCharacterRepository {
    characters: Arc<RwLock<HashMap<String, Character>>>,
    favorites: Arc<RwLock<HashSet<(Uuid, Uuid)>>>,
    find_calls: Arc<AtomicUsize>,
}

impl MockCharacterRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `find_by_external_id` was called
    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    /// Seed a character directly, bypassing upsert
    pub async fn seed(&self, character: Character) {
        self.characters
            .write()
            .await
            .insert(character.external_id.clone(), character);
    }
}

#[async_trait]
impl CharacterRepository for MockCharacterRepository {
    async fn upsert(&self, character: Character) -> Result<Character, DomainError> {
        let mut characters = self.characters.write().await;

        let stored = match characters.get(&character.external_id) {
            // Existing row keeps its internal id
            Some(existing) => Character {
                id: existing.id,
                ..character
            },
            None => character,
        };

        characters.insert(stored.external_id.clone(), stored.clone());
        Ok(stored)
    }

    async fn find_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<Character>, DomainError> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.characters.read().await.get(external_id).cloned())
    }

    async fn list(
        &self,
        pagination: &Pagination,
        name_filter: Option<&str>,
    ) -> Result<Vec<Character>, DomainError> {
        let characters = self.characters.read().await;
        let mut matched: Vec<Character> = characters
            .values()
            .filter(|c| match name_filter {
                Some(f) => c.name.to_lowercase().contains(&f.to_lowercase()),
                None => true,
            })
            .cloned()
            .collect();
        matched.sort_by(|a, b| a.name.cmp(&b.name));

        let start = pagination.offset() as usize;
        Ok(matched
            .into_iter()
            .skip(start)
            .take(pagination.limit() as usize)
            .collect())
    }

    async fn count(&self, name_filter: Option<&str>) -> Result<u64, DomainError> {
        let characters = self.characters.read().await;
        Ok(characters
            .values()
            .filter(|c| match name_filter {
                Some(f) => c.name.to_lowercase().contains(&f.to_lowercase()),
                None => true,
            })
            .count() as u64)
    }

    async fn add_favorite(
        &self,
        user_id: Uuid,
        character_id: Uuid,
    ) -> Result<bool, DomainError> {
        Ok(self.favorites.write().await.insert((user_id, character_id)))
    }

    async fn remove_favorite(
        &self,
        user_id: Uuid,
        character_id: Uuid,
    ) -> Result<bool, DomainError> {
        Ok(self.favorites.write().await.remove(&(user_id, character_id)))
    }

    async fn favorites(&self, user_id: Uuid) -> Result<Vec<Character>, DomainError> {
        let favorites = self.favorites.read().await;
        let characters = self.characters.read().await;
        let mut matched: Vec<Character> = characters
            .values()
            .filter(|c| favorites.contains(&(user_id, c.id)))
            .cloned()
            .collect();
        matched.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(matched)
    }
}
