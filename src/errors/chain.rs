//! Error types for chain client operations.
//!
//! These cover the two upstream fetches the resolution engine performs:
//! fetching a full raw block and fetching a single transaction by id.

/// Errors that can occur when fetching data from a chain client.
///
/// Chain fetch failures are fatal to the individual request (no retries);
/// the engine propagates them as [`ResolveError::Upstream`](super::ResolveError).
/// Context about which fetch failed is carried so callers can distinguish
/// "infrastructure failure" from "not found".
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    /// Failed to fetch a full raw block by id.
    #[error("Failed to fetch block {block_id} on {network}")]
    FetchBlockFailed {
        /// The network the fetch targeted
        network: String,
        /// The block id we tried to fetch
        block_id: String,
        /// The underlying client error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to fetch a raw transaction by id.
    #[error("Failed to fetch transaction {transaction_id} on {network}")]
    FetchTransactionFailed {
        /// The network the fetch targeted
        network: String,
        /// The transaction id we tried to fetch
        transaction_id: String,
        /// The underlying client error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ChainError {
    /// Helper to create a `FetchBlockFailed` error from any error type.
    pub fn fetch_block_failed(
        network: impl Into<String>,
        block_id: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ChainError::FetchBlockFailed {
            network: network.into(),
            block_id: block_id.into(),
            source: Box::new(source),
        }
    }

    /// Helper to create a `FetchTransactionFailed` error from any error type.
    pub fn fetch_transaction_failed(
        network: impl Into<String>,
        transaction_id: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ChainError::FetchTransactionFailed {
            network: network.into(),
            transaction_id: transaction_id.into(),
            source: Box::new(source),
        }
    }
}
