//! Chain client seam for fetching blocks and transactions.
//!
//! The resolution engine never talks to a node directly; it goes through the
//! [`ChainClient`] trait so the surrounding application can wire in whatever
//! RPC or P2P transport it uses. Every fetch is attempted once per request —
//! retry policy, rate limiting, and deadlines belong to the implementation.

use async_trait::async_trait;

use crate::errors::ChainError;

/// Access to full blocks and individual transactions on a named network.
///
/// Implementations are expected to honor the caller's cancellation: the
/// engine drops in-flight fetch futures when its own caller goes away and
/// never retries a failed fetch.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Fetches a full raw block by id, as consensus-encoded bytes.
    async fn fetch_block(&self, network: &str, block_id: &str) -> Result<Vec<u8>, ChainError>;

    /// Fetches a single raw transaction by id, as consensus hex.
    async fn fetch_transaction(
        &self,
        network: &str,
        transaction_id: &str,
    ) -> Result<String, ChainError>;
}
