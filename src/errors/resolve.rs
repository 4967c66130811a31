//! Error type for the resolution engine.

use super::{ChainError, CodecError};

/// Errors surfaced by [`TransactionResolver::resolve`](crate::TransactionResolver::resolve).
///
/// `InvalidArgument` is reported before any I/O is attempted. `NotFound`
/// means the block was resolved and parsed successfully but did not contain
/// the requested transaction. `Codec` and `Upstream` are infrastructure
/// failures and carry their causes.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// A required request field was missing or empty.
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Which field was missing
        reason: &'static str,
    },

    /// The requested transaction is not present in the specified block.
    #[error("Transaction {transaction_id} not present in block {block_id}")]
    NotFound {
        /// The transaction id that was searched for
        transaction_id: String,
        /// The block that was parsed and searched
        block_id: String,
    },

    /// The resolved block's raw bytes could not be parsed.
    #[error("Block decode error: {0}")]
    Codec(#[from] CodecError),

    /// A chain client fetch failed.
    #[error("Chain client error: {0}")]
    Upstream(#[from] ChainError),
}

impl ResolveError {
    /// Helper to create an `InvalidArgument` error.
    pub fn invalid_argument(reason: &'static str) -> Self {
        ResolveError::InvalidArgument { reason }
    }

    /// Helper to create a `NotFound` error.
    pub fn not_found(transaction_id: impl Into<String>, block_id: impl Into<String>) -> Self {
        ResolveError::NotFound {
            transaction_id: transaction_id.into(),
            block_id: block_id.into(),
        }
    }
}
