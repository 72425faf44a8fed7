//! Character repository trait: character rows and the favorites relation.

use async_trait::async_trait;
use lor_shared::Pagination;
use uuid::Uuid;

use crate::domain::entities::Character;
use crate::errors::DomainError;

/// Repository trait for `Character` persistence and favorites
///
/// Character rows are only written through `upsert` (the sync task);
/// everything else is read-only or touches the favorites relation.
#[async_trait]
pub trait CharacterRepository: Send + Sync {
    /// Insert or update a character keyed by `external_id`
    ///
    /// The write is a single statement, so each character is its own
    /// transaction and a crash mid-sync leaves a consistent partial state.
    ///
    /// # Returns
    /// * `Ok(Character)` - The row as persisted (existing internal id kept)
    async fn upsert(&self, character: Character) -> Result<Character, DomainError>;

    /// Find a character by its upstream identifier
    async fn find_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<Character>, DomainError>;

    /// List characters ordered by name, with an optional name filter
    async fn list(
        &self,
        pagination: &Pagination,
        name_filter: Option<&str>,
    ) -> Result<Vec<Character>, DomainError>;

    /// Total number of character rows matching the optional name filter
    async fn count(&self, name_filter: Option<&str>) -> Result<u64, DomainError>;

    /// Add a favorite pair
    ///
    /// # Returns
    /// * `Ok(true)` - Pair inserted
    /// * `Ok(false)` - Pair already existed (caller treats as no-op)
    async fn add_favorite(
        &self,
        user_id: Uuid,
        character_id: Uuid,
    ) -> Result<bool, DomainError>;

    /// Remove a favorite pair
    ///
    /// # Returns
    /// * `Ok(true)` - Pair deleted
    /// * `Ok(false)` - Pair did not exist
    async fn remove_favorite(
        &self,
        user_id: Uuid,
        character_id: Uuid,
    ) -> Result<bool, DomainError>;

    /// All characters the user has favorited, ordered by name
    async fn favorites(&self, user_id: Uuid) -> Result<Vec<Character>, DomainError>;
}
