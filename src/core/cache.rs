use crate::core::clock::Clock;
use crate::core::currency::{CurrencyCode, RateProvider, RateTable};
use crate::core::error::FxResult;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Default freshness window for a fetched rate table.
pub const DEFAULT_TTL: Duration = Duration::hours(1);

/// The most recently fetched rate table for one base currency.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub base: CurrencyCode,
    pub table: Arc<RateTable>,
    pub fetched_at: DateTime<Utc>,
}

/// Per-base cache of rate tables in front of a [`RateProvider`].
///
/// Entries are replaced wholesale after every successful fetch and are never
/// purged; a stale entry is simply ignored until the next fetch overwrites it.
/// Concurrent misses for the same base are not coalesced: each one fetches and
/// the last to finish owns the entry.
pub struct RateCache {
    provider: Arc<dyn RateProvider>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
    entries: Mutex<HashMap<CurrencyCode, CacheEntry>>,
}

impl RateCache {
    pub fn new(provider: Arc<dyn RateProvider>, clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            provider,
            clock,
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Returns the rate table for `base`, fetching it when no fresh copy is cached.
    pub async fn rates_for(&self, base: &CurrencyCode) -> FxResult<Arc<RateTable>> {
        if let Some(table) = self.fresh(base).await {
            debug!("Cache HIT for base: {}", base);
            return Ok(table);
        }
        debug!("Cache MISS for base: {}", base);

        // The lock is not held while the provider is awaited
        let table = Arc::new(self.provider.fetch_rates(base).await?);
        let entry = CacheEntry {
            base: base.clone(),
            table: Arc::clone(&table),
            fetched_at: self.clock.now(),
        };

        let mut entries = self.entries.lock().await;
        debug!("Cache PUT for base: {} ({} rates)", base, table.len());
        entries.insert(base.clone(), entry);
        Ok(table)
    }

    /// Snapshot of the cached entry for `base`, fresh or not.
    pub async fn entry(&self, base: &CurrencyCode) -> Option<CacheEntry> {
        self.entries.lock().await.get(base).cloned()
    }

    async fn fresh(&self, base: &CurrencyCode) -> Option<Arc<RateTable>> {
        let entries = self.entries.lock().await;
        let entry = entries.get(base)?;
        let age = self.clock.now() - entry.fetched_at;
        if age < self.ttl {
            Some(Arc::clone(&entry.table))
        } else {
            debug!("Cache entry expired for base: {} (age {}s)", base, age.num_seconds());
            None
        }
    }
}
