//! Sync task: pull the full upstream character listing into the store
//!
//! One run paginates the source until exhausted, upserting each
//! character by external_id and invalidating that character's cache
//! entry afterwards. The task never writes cache entries; the read path
//! stays the sole cache writer. Page fetches retry with bounded
//! exponential backoff; once retries are exhausted the run is abandoned
//! and the next scheduled run starts over.

use std::time::Duration;

use tokio::time::sleep;
use tracing::{error, info, warn};

use crate::errors::DomainError;
use crate::repositories::CharacterRepository;
use crate::services::character::CharacterCache;
use crate::services::token::TokenStore;

use super::source::{CharacterSource, SourcePage};

/// Tuning knobs for one sync run
#[derive(Debug, Clone)]
pub struct SyncTaskConfig {
    /// Page size requested from the source
    pub page_size: u32,

    /// Maximum fetch attempts per page
    pub max_retries: u32,

    /// Base delay between retries in milliseconds (doubles per attempt)
    pub retry_delay_ms: u64,
}

impl Default for SyncTaskConfig {
    fn default() -> Self {
        Self {
            page_size: 100,
            max_retries: 3,
            retry_delay_ms: 500,
        }
    }
}

/// Counters reported by a completed sync run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncStats {
    /// Pages fetched from the source
    pub pages: u32,

    /// Characters upserted into the store
    pub upserted: u64,
}

/// One-shot sync of the upstream character listing
pub struct SyncTask<R, C, S>
where
    R: CharacterRepository,
    C: CharacterCache,
    S: CharacterSource,
{
    repository: R,
    cache: C,
    source: S,
    config: SyncTaskConfig,
}

impl<R, C, S> SyncTask<R, C, S>
where
    R: CharacterRepository,
    C: CharacterCache,
    S: CharacterSource,
{
    /// Creates a new sync task
    pub fn new(repository: R, cache: C, source: S, config: SyncTaskConfig) -> Self {
        Self {
            repository,
            cache,
            source,
            config,
        }
    }

    /// Runs one full sync pass
    ///
    /// # Returns
    /// * `Ok(SyncStats)` - Pages fetched and characters upserted
    /// * `Err(DomainError)` - Source retries exhausted or store failure
    pub async fn run_once(&self) -> Result<SyncStats, DomainError> {
        let mut stats = SyncStats::default();
        let mut page = 1;

        loop {
            let source_page = self.fetch_with_retry(page).await?;
            stats.pages += 1;

            for doc in source_page.docs {
                let character = self.repository.upsert(doc.into_character()).await?;

                // Invalidate, never write: the next read repopulates the
                // entry from the freshly upserted row.
                if let Err(e) = self.cache.invalidate(&character.external_id).await {
                    warn!(
                        external_id = %character.external_id,
                        error = %e,
                        "cache invalidation failed"
                    );
                }
                stats.upserted += 1;
            }

            if page >= source_page.pages {
                break;
            }
            page += 1;
        }

        info!(pages = stats.pages, upserted = stats.upserted, "character sync finished");
        Ok(stats)
    }

    /// Whether the characters table is still empty (first boot)
    pub async fn store_is_empty(&self) -> Result<bool, DomainError> {
        Ok(self.repository.count(None).await? == 0)
    }

    /// Fetches one page, retrying with exponential backoff
    async fn fetch_with_retry(&self, page: u32) -> Result<SourcePage, DomainError> {
        let mut attempts = 0;
        let mut delay = self.config.retry_delay_ms;

        loop {
            attempts += 1;
            match self.source.fetch_page(page, self.config.page_size).await {
                Ok(source_page) => return Ok(source_page),
                Err(e) if attempts < self.config.max_retries => {
                    warn!(
                        page,
                        attempt = attempts,
                        max = self.config.max_retries,
                        error = %e,
                        "page fetch failed, retrying"
                    );
                    sleep(Duration::from_millis(delay)).await;
                    // Capped exponential backoff
                    delay = (delay * 2).min(10_000);
                }
                Err(e) => {
                    error!(page, attempts, error = %e, "page fetch retries exhausted");
                    return Err(e);
                }
            }
        }
    }
}

/// Periodic driver around [`SyncTask`]
///
/// Runs forever on a fixed interval; individual run failures are logged
/// and swallowed so a flaky upstream only affects freshness, never the
/// API. Each tick also purges expired blacklist rows from the token
/// store.
pub struct SyncRunner<R, C, S, B>
where
    R: CharacterRepository,
    C: CharacterCache,
    S: CharacterSource,
    B: TokenStore,
{
    task: SyncTask<R, C, S>,
    token_store: B,
    interval: Duration,
    run_on_startup: bool,
}

impl<R, C, S, B> SyncRunner<R, C, S, B>
where
    R: CharacterRepository,
    C: CharacterCache,
    S: CharacterSource,
    B: TokenStore,
{
    /// Creates a new runner
    pub fn new(
        task: SyncTask<R, C, S>,
        token_store: B,
        interval: Duration,
        run_on_startup: bool,
    ) -> Self {
        Self {
            task,
            token_store,
            interval,
            run_on_startup,
        }
    }

    /// Runs the periodic loop; intended to be spawned as a tokio task
    pub async fn run(self) {
        if self.run_on_startup {
            match self.task.store_is_empty().await {
                Ok(true) => {
                    info!("characters table empty, running initial sync");
                    self.run_and_log().await;
                }
                Ok(false) => {}
                Err(e) => error!(error = %e, "initial store check failed"),
            }
        }

        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // The first tick of a tokio interval completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;
            self.run_and_log().await;

            match self.token_store.purge_expired().await {
                Ok(0) => {}
                Ok(purged) => info!(purged, "purged expired blacklist entries"),
                Err(e) => warn!(error = %e, "blacklist purge failed"),
            }
        }
    }

    /// One run with failures swallowed at the task boundary
    async fn run_and_log(&self) {
        match self.task.run_once().await {
            Ok(stats) => {
                info!(pages = stats.pages, upserted = stats.upserted, "sync run complete")
            }
            Err(e) => error!(error = %e, "sync run failed, waiting for next interval"),
        }
    }
}
