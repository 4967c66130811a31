//! Error types for the txresolve library.
//!
//! Each external seam has its own error type, and the resolution engine's
//! [`ResolveError`] wraps the fatal ones:
//!
//! - [`ResolveError`] - Errors surfaced by [`TransactionResolver::resolve`](crate::TransactionResolver::resolve)
//! - [`ChainError`] - Chain client fetch failures
//! - [`CodecError`] - Malformed raw block bytes
//! - [`CacheError`] - Cache backend failures
//!
//! [`CacheError`] never surfaces from `resolve`: cache reads that fail are
//! treated as misses and cache writes that fail are logged and swallowed.
//! A flaky cache layer degrades performance, never correctness. This policy
//! lives in the engine, not in the backends.
//!
//! # Examples
//!
//! ```rust,ignore
//! use txresolve::{ResolveError, TransactionResolver};
//!
//! match resolver.resolve(request).await {
//!     Ok(tx) => println!("hex: {}", tx.hex),
//!     Err(ResolveError::NotFound { transaction_id, .. }) => {
//!         eprintln!("{transaction_id} is not in that block");
//!     }
//!     Err(ResolveError::Upstream(e)) => eprintln!("chain failure: {e}"),
//!     Err(e) => eprintln!("error: {e}"),
//! }
//! ```

mod cache;
mod chain;
mod codec;
mod resolve;

pub use cache::CacheError;
pub use chain::ChainError;
pub use codec::CodecError;
pub use resolve::ResolveError;
