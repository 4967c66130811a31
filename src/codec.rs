//! Block codec seam and the Bitcoin-family implementation.
//!
//! A codec turns a raw block's bytes into its ordered transaction list, each
//! transaction exposing its id and consensus hex. The engine only ever
//! parses a block once per memo lifetime; the parsed list is kept in the
//! [`LastBlockMemo`](crate::LastBlockMemo) afterwards.

use bitcoin::block::Block;
use bitcoin::consensus::encode;
use tracing::debug;

use crate::errors::CodecError;

/// One parsed transaction from a block, in block order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockTransaction {
    /// The transaction id (display hex, as callers quote it)
    pub id: String,
    /// The consensus-encoded transaction, hex
    pub hex: String,
}

/// Trait for parsing raw block bytes into a transaction list.
///
/// Malformed bytes must surface as [`CodecError`], never as an empty list —
/// the engine distinguishes "block parsed but transaction absent" from
/// "block could not be parsed".
pub trait BlockCodec: Send + Sync {
    /// Parses consensus-encoded block bytes into its ordered transactions.
    fn parse_block(&self, raw: &[u8]) -> Result<Vec<BlockTransaction>, CodecError>;
}

/// [`BlockCodec`] for Bitcoin-family networks, backed by the `bitcoin`
/// crate's consensus codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitcoinCodec;

impl BlockCodec for BitcoinCodec {
    fn parse_block(&self, raw: &[u8]) -> Result<Vec<BlockTransaction>, CodecError> {
        let block: Block = encode::deserialize(raw)
            .map_err(|e| CodecError::malformed_block(e.to_string()))?;

        let transactions = block
            .txdata
            .iter()
            .map(|tx| BlockTransaction {
                id: tx.compute_txid().to_string(),
                hex: encode::serialize_hex(tx),
            })
            .collect::<Vec<_>>();

        debug!(
            block_hash = %block.block_hash(),
            tx_count = transactions.len(),
            "Parsed block transactions"
        );

        Ok(transactions)
    }
}
