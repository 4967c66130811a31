//! No-operation cache that disables caching entirely

use async_trait::async_trait;
use std::time::Duration;

use super::{CacheKey, CacheStats, JsonCache};
use crate::errors::CacheError;

/// A no-operation cache that disables caching entirely
///
/// This cache backend always returns `None` for reads and ignores writes.
/// Use this when you want to disable caching for testing or specific
/// scenarios where caching is not desired. Note that a request with
/// [`CacheMode::Disabled`](crate::CacheMode::Disabled) skips the cache steps
/// outright, so this backend mostly matters when the backend choice is made
/// at wiring time rather than per request.
///
/// # Examples
///
/// ```rust,ignore
/// use txresolve::cache::NoOpCache;
/// use txresolve::TransactionResolver;
///
/// let resolver = TransactionResolver::new(chain, Box::new(NoOpCache), codec, memo);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpCache;

#[async_trait]
impl JsonCache for NoOpCache {
    async fn get(&self, _key: &CacheKey) -> Result<Option<serde_json::Value>, CacheError> {
        // Always a cache miss
        Ok(None)
    }

    async fn set(
        &self,
        _key: CacheKey,
        _value: serde_json::Value,
        _ttl: Duration,
    ) -> Result<(), CacheError> {
        // Ignore writes
        Ok(())
    }

    async fn clear(&self) -> Result<(), CacheError> {
        // Nothing to clear
        Ok(())
    }

    async fn stats(&self) -> CacheStats {
        // No statistics to track
        CacheStats::default()
    }

    fn name(&self) -> &'static str {
        "NoOpCache"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheKind;

    #[tokio::test]
    async fn test_noop_cache_always_misses() {
        let cache = NoOpCache;
        let key = CacheKey::new(CacheKind::Transaction, "abc");

        assert!(cache.get(&key).await.unwrap().is_none());

        // Writes succeed but are dropped
        cache
            .set(
                key.clone(),
                serde_json::json!({"transaction": "01"}),
                Duration::from_secs(60),
            )
            .await
            .unwrap();
        assert!(cache.get(&key).await.unwrap().is_none());

        let stats = cache.stats().await;
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.entries, 0);
    }
}
