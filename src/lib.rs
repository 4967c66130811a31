//! Resolve raw blockchain transactions by id, with layered caching.
//!
//! Given a transaction id and a network name, [`TransactionResolver`]
//! produces the transaction's consensus hex, going through (in order) a
//! TTL-bounded JSON cache, a per-network last-resolved-block memo, and the
//! chain client. When the caller already knows the containing block it can
//! pin the lookup to that block hash; the block is then fetched once, parsed
//! once, and its transaction list searched in memory.
//!
//! The chain client, cache backend, and block codec are trait seams
//! ([`ChainClient`], [`cache::JsonCache`], [`BlockCodec`]) so the
//! surrounding application controls transports and storage. [`MemoryCache`]
//! and [`NoOpCache`] backends and a Bitcoin-family [`BitcoinCodec`] ship in
//! the crate.
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
//!     my_chain_client,
//!     Box::new(MemoryCache::new()),
//!     Box::new(BitcoinCodec),
//!     Arc::new(LastBlockMemo::new()),
//! );
//!
//! // Direct lookup with caching
//! let request = LookupRequest::new(txid, "mainnet").with_cache(CacheMode::Enabled);
//! let tx = resolver.resolve(request).await?;
//!
//! // Block-scoped lookup
//! let request = LookupRequest::new(txid, "mainnet")
//!     .in_block(block_hash)
//!     .with_cache(CacheMode::Enabled);
//! let tx = resolver.resolve(request).await?;
//! ```

pub mod cache;
mod chain;
mod codec;
mod errors;
mod memo;
mod resolver;
mod tracing;

pub use cache::{CacheKey, CacheKind, CacheStats, MemoryCache, NoOpCache, CACHE_TTL};
pub use chain::ChainClient;
pub use codec::{BitcoinCodec, BlockCodec, BlockTransaction};
pub use errors::{CacheError, ChainError, CodecError, ResolveError};
pub use memo::{LastBlockMemo, MemoEntry};
pub use resolver::{CacheMode, LookupRequest, ResolvedTransaction, TransactionResolver};
