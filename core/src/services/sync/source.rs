//! External character source trait and wire types
//!
//! The upstream API paginates characters in an envelope of
//! `docs/total/limit/offset/page/pages`; character records use `_id`
//! and `wikiUrl`. The trait treats the upstream as an opaque fallible
//! source; rate limiting and auth are the implementation's concern.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::Character;
use crate::errors::DomainError;

/// One character record as the upstream API ships it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceCharacter {
    #[serde(rename = "_id")]
    pub external_id: String,

    pub name: String,

    #[serde(rename = "wikiUrl", default)]
    pub wiki_url: Option<String>,

    #[serde(default)]
    pub race: Option<String>,
    #[serde(default)]
    pub birth: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub death: Option<String>,
    #[serde(default)]
    pub hair: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub realm: Option<String>,
    #[serde(default)]
    pub spouse: Option<String>,
}

impl SourceCharacter {
    /// Converts the wire record into a fresh domain character
    ///
    /// The internal id is provisional; the repository keeps the existing
    /// id when the external_id is already present.
    pub fn into_character(self) -> Character {
        Character {
            id: Uuid::new_v4(),
            external_id: self.external_id,
            name: self.name,
            wiki_url: self.wiki_url,
            race: self.race,
            birth: self.birth,
            gender: self.gender,
            death: self.death,
            hair: self.hair,
            height: self.height,
            realm: self.realm,
            spouse: self.spouse,
            last_synced_at: Utc::now(),
        }
    }
}

/// One page of the upstream character listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcePage {
    #[serde(default)]
    pub docs: Vec<SourceCharacter>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub pages: u32,
}

/// Paginated, fallible source of character records
#[async_trait]
pub trait CharacterSource: Send + Sync {
    /// Fetch one page of the character listing (pages are 1-indexed)
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<SourcePage, DomainError>;
}

#[cfg(test)]
pub mod mock {
    //! Mock implementation of CharacterSource for testing

    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::{CharacterSource, SourcePage};
    use crate::errors::DomainError;

    /// Scripted source: serves fixed pages, optionally failing the first
    /// N fetch calls to exercise the retry path.
    #[derive(Clone)]
    pub struct MockCharacterSource {
        pages: Vec<SourcePage>,
        fail_first: Arc<AtomicU32>,
        calls: Arc<AtomicU32>,
    }

    impl MockCharacterSource {
        pub fn new(pages: Vec<SourcePage>) -> Self {
            Self {
                pages,
                fail_first: Arc::new(AtomicU32::new(0)),
                calls: Arc::new(AtomicU32::new(0)),
            }
        }

        /// Fail the first `n` fetch calls with `UpstreamUnavailable`
        pub fn failing_first(self, n: u32) -> Self {
            self.fail_first.store(n, Ordering::SeqCst);
            self
        }

        /// Total number of fetch calls made
        pub fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CharacterSource for MockCharacterSource {
        async fn fetch_page(&self, page: u32, _limit: u32) -> Result<SourcePage, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            let remaining = self.fail_first.load(Ordering::SeqCst);
            if remaining > 0 {
                self.fail_first.store(remaining - 1, Ordering::SeqCst);
                return Err(DomainError::UpstreamUnavailable {
                    message: "scripted failure".to_string(),
                });
            }

            self.pages
                .get((page.saturating_sub(1)) as usize)
                .cloned()
                .ok_or_else(|| DomainError::UpstreamUnavailable {
                    message: format!("no such page: {}", page),
                })
        }
    }
}
