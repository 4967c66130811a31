//! In-memory cache implementation with per-entry TTL expiry

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::debug;

use super::{CacheKey, CacheStats, JsonCache};
use crate::errors::CacheError;

/// Entry in the memory cache with its expiry deadline
#[derive(Debug, Clone)]
struct CacheEntry {
    /// The cached JSON value
    value: serde_json::Value,
    /// When this entry stops being served
    expires_at: Instant,
}

impl CacheEntry {
    fn new(value: serde_json::Value, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Internal state for memory cache
#[derive(Debug, Default)]
struct MemoryCacheState {
    /// The cache entries
    entries: HashMap<CacheKey, CacheEntry>,
    /// Cache statistics
    stats: CacheStats,
}

/// In-memory cache with per-entry TTL expiry
///
/// Stores JSON values in a HashMap behind an async mutex. Each entry carries
/// its own expiry deadline, taken from the TTL supplied at write time.
/// Expired entries are dropped lazily on access.
///
/// # Examples
///
/// ```rust,ignore
/// use txresolve::cache::{CacheKey, CacheKind, MemoryCache, JsonCache, CACHE_TTL};
///
/// let cache = MemoryCache::new();
/// let key = CacheKey::new(CacheKind::Transaction, "abc");
/// cache.set(key.clone(), serde_json::json!({"transaction": "0100..."}), CACHE_TTL).await?;
/// let hit = cache.get(&key).await?;
/// ```
///
/// # Performance
///
/// - Get: O(1) average case (HashMap lookup)
/// - Set: O(1)
/// - Memory: bounded only by TTL turnover; the engine stores at most one
///   block and one transaction entry per lookup
#[derive(Debug, Default)]
pub struct MemoryCache {
    state: Mutex<MemoryCacheState>,
}

impl MemoryCache {
    /// Creates a new empty memory cache
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JsonCache for MemoryCache {
    async fn get(&self, key: &CacheKey) -> Result<Option<serde_json::Value>, CacheError> {
        let mut state = self.state.lock().await;

        // Copy out before mutating so the entry borrow ends here
        let (expired, value) = match state.entries.get(key) {
            Some(entry) if entry.is_expired() => (true, None),
            Some(entry) => (false, Some(entry.value.clone())),
            None => (false, None),
        };

        if expired {
            debug!(key = %key, "Cache entry expired");
            state.entries.remove(key);
            state.stats.expirations += 1;
            state.stats.misses += 1;
            state.stats.entries = state.entries.len();
            return Ok(None);
        }

        match value {
            Some(value) => {
                state.stats.hits += 1;
                debug!(key = %key, "Cache hit (memory)");
                Ok(Some(value))
            }
            None => {
                state.stats.misses += 1;
                debug!(key = %key, "Cache miss (memory)");
                Ok(None)
            }
        }
    }

    async fn set(
        &self,
        key: CacheKey,
        value: serde_json::Value,
        ttl: Duration,
    ) -> Result<(), CacheError> {
        let mut state = self.state.lock().await;

        debug!(key = %key, ttl_secs = ttl.as_secs(), "Inserting entry into memory cache");
        state.entries.insert(key, CacheEntry::new(value, ttl));
        state.stats.entries = state.entries.len();

        Ok(())
    }

    async fn clear(&self) -> Result<(), CacheError> {
        let mut state = self.state.lock().await;
        debug!(entries = state.entries.len(), "Clearing memory cache");
        state.entries.clear();
        state.stats.entries = 0;
        Ok(())
    }

    async fn stats(&self) -> CacheStats {
        let state = self.state.lock().await;
        state.stats.clone()
    }

    fn name(&self) -> &'static str {
        "MemoryCache"
    }
}
