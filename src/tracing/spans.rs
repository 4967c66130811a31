//! Span creation helpers for txresolve operations.
//!
//! Telemetry is kept orthogonal to the business logic: instead of
//! `#[instrument]` attributes on the resolver methods, each instrumented
//! operation has a corresponding span helper here.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub async fn my_operation(&self, param: Type) -> Result<T> {
//!     let span = spans::my_operation(param_value);
//!     let _guard = span.enter();
//!     // Business logic here
//! }
//! ```

use tracing::Span;

/// Create span for a full transaction resolution.
///
/// Parent: None (root span for this operation)
/// Children: resolve_direct or resolve_block_scoped span
#[inline]
pub(crate) fn resolve_transaction(network: &str, transaction_id: &str) -> Span {
    tracing::info_span!(
        "txresolve.resolve_transaction",
        network = %network,
        transaction_id = %transaction_id,
    )
}

/// Create span for the direct (non-block-scoped) lookup path.
///
/// Parent: resolve_transaction span
/// Children: cache and chain client calls
#[inline]
pub(crate) fn resolve_direct(network: &str, transaction_id: &str) -> Span {
    tracing::debug_span!(
        "txresolve.resolve_direct",
        network = %network,
        transaction_id = %transaction_id,
    )
}

/// Create span for the block-scoped lookup path.
///
/// Parent: resolve_transaction span
/// Children: cache, chain client, and codec calls
#[inline]
pub(crate) fn resolve_block_scoped(network: &str, transaction_id: &str, block_id: &str) -> Span {
    tracing::debug_span!(
        "txresolve.resolve_block_scoped",
        network = %network,
        transaction_id = %transaction_id,
        block_id = %block_id,
    )
}
