//! Error types for cache backend operations.

/// Errors that can occur inside a [`JsonCache`](crate::cache::JsonCache) backend.
///
/// These never fail a resolution: the engine treats a read error as a cache
/// miss and continues to a fresh fetch, and a write error is logged and
/// dropped since it only affects future performance.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// The backend failed to read or write an entry.
    ///
    /// Payload decoding is not a backend concern: the resolver decodes
    /// cached JSON bodies itself and treats an undecodable payload as a
    /// miss.
    #[error("Cache backend error during {operation}")]
    Backend {
        /// Description of the operation that failed (e.g., "get get_transaction_tx:abc")
        operation: String,
        /// The underlying backend error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl CacheError {
    /// Helper to create a `Backend` error from any error type.
    pub fn backend(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        CacheError::Backend {
            operation: operation.into(),
            source: Box::new(source),
        }
    }
}
