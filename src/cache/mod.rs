//! Cache backends for resolved blocks and transactions
//!
//! This module provides the JSON cache seam the resolution engine writes
//! through, plus two backends:
//!
//! - [`MemoryCache`]: In-memory cache with per-entry TTL expiry
//! - [`NoOpCache`]: Disables caching entirely (for testing or specific use cases)
//!
//! Entries are keyed by a [`CacheKind`] (block or transaction) and a string
//! key (block hash or transaction id). The TTL is supplied per write; the
//! engine always uses [`CACHE_TTL`].
//!
//! # Examples
//!
//! ```rust,ignore
//! use txresolve::cache::{MemoryCache, NoOpCache};
//! use txresolve::TransactionResolver;
//!
//! // In-memory cache
//! let resolver = TransactionResolver::new(chain, Box::new(MemoryCache::new()), codec, memo);
//!
//! // No cache (every lookup goes to the chain)
//! let resolver = TransactionResolver::new(chain, Box::new(NoOpCache), codec, memo);
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::errors::CacheError;

mod memory;
mod noop;

pub use memory::MemoryCache;
pub use noop::NoOpCache;

/// How long cached blocks and transactions stay valid.
pub const CACHE_TTL: Duration = Duration::from_secs(60 * 10);

/// The kind of value stored under a cache key.
///
/// The wire strings match the type names the cache store has always used,
/// so entries written by older deployments remain readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CacheKind {
    /// A full raw block, hex-encoded, keyed by block hash
    Block,
    /// A single raw transaction, hex-encoded, keyed by transaction id
    Transaction,
}

impl CacheKind {
    /// Returns the storage type string for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheKind::Block => "get_transaction_block",
            CacheKind::Transaction => "get_transaction_tx",
        }
    }
}

impl fmt::Display for CacheKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key for a cached block or transaction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey {
    pub(crate) kind: CacheKind,
    pub(crate) key: String,
}

impl CacheKey {
    /// Creates a new cache key for a kind and id
    pub fn new(kind: CacheKind, key: impl Into<String>) -> Self {
        Self {
            kind,
            key: key.into(),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.key)
    }
}

/// Statistics about cache performance
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheStats {
    /// Number of cache hits (successful retrievals)
    pub hits: u64,
    /// Number of cache misses (key not found)
    pub misses: u64,
    /// Number of entries expired due to TTL
    pub expirations: u64,
    /// Current number of entries in the cache
    pub entries: usize,
}

impl CacheStats {
    /// Calculates the cache hit rate as a percentage (0.0 to 100.0)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hits={}, misses={}, expirations={}, entries={}, hit_rate={:.1}%",
            self.hits,
            self.misses,
            self.expirations,
            self.entries,
            self.hit_rate()
        )
    }
}

/// Trait for JSON cache backends
///
/// Implementations store arbitrary JSON values under `(kind, key)` with a
/// per-entry TTL supplied at write time.
///
/// # Thread Safety
///
/// Implementations must be thread-safe and support concurrent access. Use
/// interior mutability (e.g., `Mutex`, `RwLock`) as needed.
///
/// # Error Handling
///
/// Backends report failures through [`CacheError`], but callers must not let
/// a cache failure fail the surrounding operation: the resolution engine
/// treats a failed `get` as a miss and a failed `set` as a no-op.
#[async_trait]
pub trait JsonCache: Send + Sync {
    /// Retrieves a cached JSON value for the given key
    ///
    /// Returns `Ok(None)` if the key is not in the cache or the entry has
    /// expired. Returns `Err` only for backend failures.
    async fn get(&self, key: &CacheKey) -> Result<Option<serde_json::Value>, CacheError>;

    /// Inserts a JSON value with the given time-to-live
    ///
    /// An existing entry under the same key is replaced, and its expiry
    /// restarts from now.
    async fn set(
        &self,
        key: CacheKey,
        value: serde_json::Value,
        ttl: Duration,
    ) -> Result<(), CacheError>;

    /// Clears all entries from the cache
    ///
    /// Used for testing and cache management. Not all backends may support this.
    async fn clear(&self) -> Result<(), CacheError>;

    /// Returns current cache statistics
    async fn stats(&self) -> CacheStats;

    /// Returns a human-readable name for this cache backend
    ///
    /// Used for logging and debugging.
    fn name(&self) -> &'static str;
}
