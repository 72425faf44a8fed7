//! Token store backed by Redis with a durable Postgres blacklist.
//!
//! Issued identifiers live only in Redis (`jwt:{jti}`) and expire with
//! the token. Blacklist entries are written to both places: Redis
//! (`bl:{jti}`) serves the hot path, the `blacklisted_tokens` table
//! survives a cache flush. Lookups consult Redis first and fall back to
//! Postgres on a miss or a cache outage.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use sqlx::{PgPool, Row};
use tracing::warn;

use lor_core::errors::DomainError;
use lor_core::services::token::TokenStore;

use super::redis_client::RedisClient;

const ISSUED_PREFIX: &str = "jwt";
const BLACKLIST_PREFIX: &str = "bl";

/// TokenStore implementation over Redis and Postgres
#[derive(Clone)]
pub struct RedisTokenStore {
    redis: RedisClient,
    pool: PgPool,
}

impl RedisTokenStore {
    pub fn new(redis: RedisClient, pool: PgPool) -> Self {
        Self { redis, pool }
    }

    fn issued_key(&self, jti: &str) -> String {
        self.redis
            .config()
            .make_key(&format!("{}:{}", ISSUED_PREFIX, jti))
    }

    fn blacklist_key(&self, jti: &str) -> String {
        self.redis
            .config()
            .make_key(&format!("{}:{}", BLACKLIST_PREFIX, jti))
    }
}

#[async_trait]
impl TokenStore for RedisTokenStore {
    async fn issue(&self, jti: &str, ttl_seconds: u64) -> Result<(), DomainError> {
        // Issued records are advisory; losing them does not widen access,
        // so a cache outage is logged rather than failing token issuance.
        if let Err(e) = self
            .redis
            .set_with_expiry(&self.issued_key(jti), "1", ttl_seconds)
            .await
        {
            warn!("Failed to record issued token '{}': {}", jti, e);
        }
        Ok(())
    }

    async fn is_blacklisted(&self, jti: &str) -> Result<bool, DomainError> {
        match self.redis.exists(&self.blacklist_key(jti)).await {
            Ok(true) => return Ok(true),
            Ok(false) => {}
            Err(e) => {
                warn!("Blacklist cache check failed for '{}': {}", jti, e);
            }
        }

        let row = sqlx::query(
            "SELECT EXISTS(SELECT 1 FROM blacklisted_tokens \
             WHERE jti = $1 AND expires_at > $2) AS blacklisted",
        )
        .bind(jti)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::StoreUnavailable {
            message: format!("Blacklist lookup failed: {}", e),
        })?;

        let blacklisted: bool = row
            .try_get("blacklisted")
            .map_err(|e| DomainError::StoreUnavailable {
                message: format!("Failed to read blacklist result: {}", e),
            })?;

        Ok(blacklisted)
    }

    async fn blacklist(&self, jti: &str, ttl_seconds: u64) -> Result<(), DomainError> {
        let expires_at = Utc::now() + Duration::seconds(ttl_seconds as i64);

        // The durable row is the source of truth and must succeed.
        sqlx::query(
            "INSERT INTO blacklisted_tokens (jti, blacklisted_at, expires_at) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (jti) DO NOTHING",
        )
        .bind(jti)
        .bind(Utc::now())
        .bind(expires_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::StoreUnavailable {
            message: format!("Failed to blacklist token: {}", e),
        })?;

        if let Err(e) = self
            .redis
            .set_with_expiry(&self.blacklist_key(jti), "1", ttl_seconds.max(1))
            .await
        {
            warn!("Failed to cache blacklist entry '{}': {}", jti, e);
        }

        Ok(())
    }

    async fn purge_expired(&self) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM blacklisted_tokens WHERE expires_at <= $1")
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::StoreUnavailable {
                message: format!("Failed to purge expired blacklist rows: {}", e),
            })?;

        Ok(result.rows_affected())
    }
}
