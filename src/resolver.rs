//! Transaction resolution engine.
//!
//! [`TransactionResolver::resolve`] runs a fixed set of guarded stages.
//! Ordering is fixed: cache lookups before fresh fetches, fresh fetches
//! before cache writebacks, block resolution before extraction. A stage
//! whose precondition is unmet is a pure no-op, not a failure.
//!
//! | Stage                       | Runs when                                                  | Produces                                      |
//! |-----------------------------|------------------------------------------------------------|-----------------------------------------------|
//! | Validate                    | always                                                     | rejects empty id/network before any I/O       |
//! | LookupCachedTransaction     | no block id, caching enabled                               | cached tx hex (read failure = miss)           |
//! | FetchFreshTransaction       | no block id, no cached tx                                  | fresh tx hex (fatal on failure)               |
//! | WriteTransactionToCache     | no block id, caching enabled, no cached tx, fresh tx found | best-effort writeback, 10-minute TTL          |
//! | LookupCachedBlock           | block id given, caching enabled, no tx yet                 | raw block (memo consulted before the store)   |
//! | FetchFreshBlock             | block id given, no memo or cache hit                       | raw block bytes (fatal on failure)            |
//! | WriteBlockToCache           | block came from the chain, caching enabled                 | best-effort writeback, 10-minute TTL          |
//! | ExtractTransactionFromBlock | block id given, block available                            | matching tx hex; memo updated either way      |
//! | ComposeResult               | always                                                     | block-scoped result, else the direct result   |
//!
//! The direct stages live in `resolve_direct` and the block-scoped stages in
//! `resolve_block_scoped`; exactly one of the two runs for any request. The
//! block-scoped path holds the network's [`LastBlockMemo`] slot guard from
//! the memo consult through the memo update, so concurrent lookups against
//! the same network cannot leave the memo holding a block id from one block
//! and a transaction list from another.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use txresolve::{
//!     BitcoinCodec, CacheMode, LastBlockMemo, LookupRequest, MemoryCache, TransactionResolver,
//! };
//!
//! let resolver = TransactionResolver::new(
//!     chain,
//!     Box::new(MemoryCache::new()),
//!     Box::new(BitcoinCodec),
//!     Arc::new(LastBlockMemo::new()),
//! );
//!
//! let request = LookupRequest::new("4a5e…a33b", "mainnet").with_cache(CacheMode::Enabled);
//! let tx = resolver.resolve(request).await?;
//! println!("{}", tx.hex);
//! ```

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

use crate::cache::{CacheKey, CacheKind, CacheStats, JsonCache, CACHE_TTL};
use crate::chain::ChainClient;
use crate::codec::BlockCodec;
use crate::errors::ResolveError;
use crate::memo::{LastBlockMemo, MemoEntry};
use crate::tracing::spans;

/// Per-request cache policy.
///
/// Mirrors the request's optional cache selector: absent means the cache
/// layer is skipped entirely, both for lookups and writebacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheMode {
    /// Skip all cache lookups and writebacks
    #[default]
    Disabled,
    /// Use the configured cache backend
    Enabled,
}

impl CacheMode {
    /// Whether cache stages run for this request
    pub fn is_enabled(&self) -> bool {
        matches!(self, CacheMode::Enabled)
    }
}

/// A request to resolve one transaction.
#[derive(Debug, Clone)]
pub struct LookupRequest {
    /// The transaction id to resolve (required, non-empty)
    pub transaction_id: String,
    /// The network to resolve it on (required, non-empty)
    pub network: String,
    /// Pin the search to this block hash when the containing block is known
    pub block_id: Option<String>,
    /// Per-request cache policy
    pub cache: CacheMode,
}

impl LookupRequest {
    /// Creates a direct lookup request with caching disabled
    pub fn new(transaction_id: impl Into<String>, network: impl Into<String>) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            network: network.into(),
            block_id: None,
            cache: CacheMode::Disabled,
        }
    }

    /// Scopes the lookup to a specific block hash
    pub fn in_block(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }

    /// Sets the cache policy for this request
    pub fn with_cache(mut self, cache: CacheMode) -> Self {
        self.cache = cache;
        self
    }
}

/// The resolved transaction, as consensus hex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTransaction {
    /// The consensus-encoded transaction, hex
    pub hex: String,
}

/// Cached block payload body
#[derive(Debug, Deserialize)]
struct CachedBlock {
    block: String,
}

/// Cached transaction payload body
#[derive(Debug, Deserialize)]
struct CachedTransaction {
    transaction: String,
}

/// Resolves transactions by id, optionally scoped to a block, in front of a
/// layered cache.
///
/// Collaborators are injected: the chain client does the actual fetching,
/// the [`JsonCache`] backend holds TTL-bounded block/transaction entries,
/// the [`BlockCodec`] parses raw blocks, and the shared [`LastBlockMemo`]
/// short-circuits repeated lookups against one block. Cache failures are
/// never fatal here; chain and codec failures are.
pub struct TransactionResolver<C> {
    chain: C,
    cache: Box<dyn JsonCache>,
    codec: Box<dyn BlockCodec>,
    memo: Arc<LastBlockMemo>,
}

impl<C: ChainClient> TransactionResolver<C> {
    /// Creates a resolver from its injected collaborators
    ///
    /// The memo is `Arc`-shared so multiple resolvers (or tests) can observe
    /// the same per-network state.
    pub fn new(
        chain: C,
        cache: Box<dyn JsonCache>,
        codec: Box<dyn BlockCodec>,
        memo: Arc<LastBlockMemo>,
    ) -> Self {
        Self {
            chain,
            cache,
            codec,
            memo,
        }
    }

    /// Returns current cache backend statistics
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.stats().await
    }

    /// Resolves a transaction to its consensus hex.
    ///
    /// Direct lookups (no `block_id`) go cached-tx → chain → writeback.
    /// Block-scoped lookups resolve the block (memo → cache → chain), parse
    /// it once, and search its transaction list for the requested id.
    pub async fn resolve(
        &self,
        request: LookupRequest,
    ) -> Result<ResolvedTransaction, ResolveError> {
        let span = spans::resolve_transaction(&request.network, &request.transaction_id);
        let _guard = span.enter();

        if request.transaction_id.is_empty() {
            return Err(ResolveError::invalid_argument("missing transaction id"));
        }
        if request.network.is_empty() {
            return Err(ResolveError::invalid_argument("missing network"));
        }

        let resolved = match request.block_id.clone() {
            Some(block_id) => self.resolve_block_scoped(&request, &block_id).await?,
            None => self.resolve_direct(&request).await?,
        };

        info!(
            network = %request.network,
            transaction_id = %request.transaction_id,
            block_scoped = request.block_id.is_some(),
            cache = %self.cache.name(),
            "Resolved transaction"
        );

        Ok(resolved)
    }

    /// Direct lookup: cached transaction, else chain fetch plus writeback.
    async fn resolve_direct(
        &self,
        request: &LookupRequest,
    ) -> Result<ResolvedTransaction, ResolveError> {
        let span = spans::resolve_direct(&request.network, &request.transaction_id);
        let _guard = span.enter();

        let cache_enabled = request.cache.is_enabled();

        // LookupCachedTransaction
        let cached = if cache_enabled {
            self.lookup_cached_transaction(&request.transaction_id).await
        } else {
            None
        };

        if let Some(hex) = cached {
            return Ok(ResolvedTransaction { hex });
        }

        // FetchFreshTransaction: fatal on failure, attempted once
        let hex = self
            .chain
            .fetch_transaction(&request.network, &request.transaction_id)
            .await?;

        // WriteTransactionToCache: best-effort
        if cache_enabled {
            self.write_transaction_to_cache(&request.transaction_id, &hex)
                .await;
        }

        Ok(ResolvedTransaction { hex })
    }

    /// Block-scoped lookup: resolve the block, parse it once, search it.
    ///
    /// Holds the network's memo slot guard for the whole sequence so the
    /// consult/discard/update cycle is atomic per network.
    async fn resolve_block_scoped(
        &self,
        request: &LookupRequest,
        block_id: &str,
    ) -> Result<ResolvedTransaction, ResolveError> {
        let span = spans::resolve_block_scoped(&request.network, &request.transaction_id, block_id);
        let _guard = span.enter();

        let cache_enabled = request.cache.is_enabled();
        let mut slot = self.memo.lock(&request.network).await;

        // LookupCachedBlock, memo first. A stored entry for a different
        // block is discarded whole before falling through to the store.
        let memoized = match slot.take() {
            Some(entry) if entry.block_id == block_id => {
                debug!(network = %request.network, block_id, "Last-block memo hit");
                Some(entry)
            }
            Some(stale) => {
                debug!(
                    network = %request.network,
                    stale_block_id = %stale.block_id,
                    block_id,
                    "Discarding last-block memo for different block"
                );
                None
            }
            None => None,
        };

        let (raw_block, parsed, from_chain) = match memoized {
            Some(entry) => (entry.raw_block, entry.transactions, false),
            None => {
                let cached = if cache_enabled {
                    self.lookup_cached_block(block_id).await
                } else {
                    None
                };
                match cached {
                    Some(bytes) => (bytes, None, false),
                    // FetchFreshBlock: fatal on failure, attempted once
                    None => {
                        let bytes = self.chain.fetch_block(&request.network, block_id).await?;
                        (bytes, None, true)
                    }
                }
            }
        };

        // WriteBlockToCache: only blocks that actually came from the chain
        if from_chain && cache_enabled {
            self.write_block_to_cache(block_id, &raw_block).await;
        }

        // ExtractTransactionFromBlock: reuse the memoized parse when present
        let transactions = match parsed {
            Some(transactions) => transactions,
            None => self.codec.parse_block(&raw_block)?,
        };

        let found = transactions
            .iter()
            .find(|tx| tx.id == request.transaction_id)
            .map(|tx| tx.hex.clone());

        // The memo is updated with the parsed list even when the search
        // misses, so later lookups against this block skip the parse.
        *slot = Some(MemoEntry {
            block_id: block_id.to_string(),
            raw_block,
            transactions: Some(transactions),
        });

        match found {
            Some(hex) => Ok(ResolvedTransaction { hex }),
            None => Err(ResolveError::not_found(&request.transaction_id, block_id)),
        }
    }

    /// Cache read for a transaction entry. Read failures and undecodable
    /// payloads degrade to a miss.
    async fn lookup_cached_transaction(&self, transaction_id: &str) -> Option<String> {
        let key = CacheKey::new(CacheKind::Transaction, transaction_id);
        let value = match self.cache.get(&key).await {
            Ok(value) => value?,
            Err(e) => {
                debug!(key = %key, error = %e, "Cache read failed, treating as miss");
                return None;
            }
        };

        match serde_json::from_value::<CachedTransaction>(value) {
            Ok(body) => Some(body.transaction),
            Err(e) => {
                debug!(key = %key, error = %e, "Undecodable cached transaction, treating as miss");
                None
            }
        }
    }

    /// Cache read for a block entry, decoding the hex body back to bytes.
    async fn lookup_cached_block(&self, block_id: &str) -> Option<Vec<u8>> {
        let key = CacheKey::new(CacheKind::Block, block_id);
        let value = match self.cache.get(&key).await {
            Ok(value) => value?,
            Err(e) => {
                debug!(key = %key, error = %e, "Cache read failed, treating as miss");
                return None;
            }
        };

        let body = match serde_json::from_value::<CachedBlock>(value) {
            Ok(body) => body,
            Err(e) => {
                debug!(key = %key, error = %e, "Undecodable cached block, treating as miss");
                return None;
            }
        };

        match hex::decode(&body.block) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                debug!(key = %key, error = %e, "Cached block is not valid hex, treating as miss");
                None
            }
        }
    }

    /// Best-effort cache writeback of a fresh transaction.
    async fn write_transaction_to_cache(&self, transaction_id: &str, hex: &str) {
        let key = CacheKey::new(CacheKind::Transaction, transaction_id);
        let value = serde_json::json!({ "transaction": hex });

        if let Err(e) = self.cache.set(key.clone(), value, CACHE_TTL).await {
            debug!(key = %key, error = %e, "Failed to cache transaction (continuing anyway)");
        }
    }

    /// Best-effort cache writeback of a freshly fetched block.
    async fn write_block_to_cache(&self, block_id: &str, raw_block: &[u8]) {
        let key = CacheKey::new(CacheKind::Block, block_id);
        let value = serde_json::json!({ "block": hex::encode(raw_block) });

        if let Err(e) = self.cache.set(key.clone(), value, CACHE_TTL).await {
            debug!(key = %key, error = %e, "Failed to cache block (continuing anyway)");
        }
    }
}
