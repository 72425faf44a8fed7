//! Token store trait: issued and blacklisted JWT identifiers
//!
//! Backed by a TTL-capable key-value store in production (Redis with a
//! relational fallback). Entries self-expire with the token they track,
//! so no garbage collection is needed on the fast path; `purge_expired`
//! exists for the durable relational rows.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Store of issued/blacklisted JWT identifiers (jti claims)
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Record an issued token identifier with the token's lifetime
    async fn issue(&self, jti: &str, ttl_seconds: u64) -> Result<(), DomainError>;

    /// Check whether a token identifier has been blacklisted
    async fn is_blacklisted(&self, jti: &str) -> Result<bool, DomainError>;

    /// Blacklist a token identifier until it would have expired anyway
    async fn blacklist(&self, jti: &str, ttl_seconds: u64) -> Result<(), DomainError>;

    /// Remove expired blacklist entries from durable storage
    ///
    /// # Returns
    /// * `Ok(u64)` - Number of rows purged
    async fn purge_expired(&self) -> Result<u64, DomainError>;
}

#[cfg(test)]
pub mod mock {
    //! Mock implementation of TokenStore for testing

    use std::collections::{HashMap, HashSet};
    use std::sync::Arc;

    use async_trait::async_trait;
    use tokio::sync::RwLock;

    use super::TokenStore;
    use crate::errors::DomainError;

    /// In-memory token store for tests (TTLs recorded, never enforced)
    #[derive(Clone, Default)]
    pub struct MockTokenStore {
        issued: Arc<RwLock<HashMap<String, u64>>>,
        blacklisted: Arc<RwLock<HashSet<String>>>,
    }

    impl MockTokenStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Whether a jti was recorded through `issue`
        pub async fn was_issued(&self, jti: &str) -> bool {
            self.issued.read().await.contains_key(jti)
        }

        /// Number of blacklisted identifiers
        pub async fn blacklisted_count(&self) -> usize {
            self.blacklisted.read().await.len()
        }
    }

    #[async_trait]
    impl TokenStore for MockTokenStore {
        async fn issue(&self, jti: &str, ttl_seconds: u64) -> Result<(), DomainError> {
            self.issued
                .write()
                .await
                .insert(jti.to_string(), ttl_seconds);
            Ok(())
        }

        async fn is_blacklisted(&self, jti: &str) -> Result<bool, DomainError> {
            Ok(self.blacklisted.read().await.contains(jti))
        }

        async fn blacklist(&self, jti: &str, _ttl_seconds: u64) -> Result<(), DomainError> {
            self.blacklisted.write().await.insert(jti.to_string());
            Ok(())
        }

        async fn purge_expired(&self) -> Result<u64, DomainError> {
            Ok(0)
        }
    }
}
