//! Per-network last-resolved-block memoization.
//!
//! When a burst of lookups targets the same block (resolving every
//! transaction of one block is the common shape), fetching and re-parsing
//! that block per lookup would dominate the work. The [`LastBlockMemo`]
//! keeps exactly one entry per network: the most recently resolved block's
//! id, raw bytes, and (once computed) its parsed transaction list.
//!
//! The memo is an explicit, injectable component rather than process-global
//! state, and every slot is guarded by its own async mutex. The resolver
//! holds a slot's guard for the whole block-scoped phase of a request, so
//! checking the stored id, discarding a stale entry, and writing the
//! replacement cannot interleave with another resolution on the same
//! network. Entries are always replaced whole, never merged.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::debug;

use crate::codec::BlockTransaction;

/// The memoized state for one network.
#[derive(Debug, Clone)]
pub struct MemoEntry {
    /// Id of the block this entry describes
    pub block_id: String,
    /// The block's consensus-encoded bytes
    pub raw_block: Vec<u8>,
    /// Parsed transaction list, populated on first extraction
    pub transactions: Option<Vec<BlockTransaction>>,
}

type Slot = Arc<Mutex<Option<MemoEntry>>>;

/// Single-entry-per-network lookaside cache of the last resolved block.
///
/// Has no TTL of its own; an entry lives until a lookup for that network
/// requests a different block, at which point it is discarded whole.
/// Staleness is bounded by the TTL on the underlying block cache, not here.
#[derive(Debug, Default)]
pub struct LastBlockMemo {
    slots: Mutex<HashMap<String, Slot>>,
}

impl LastBlockMemo {
    /// Creates an empty memo
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the slot for a network, creating it on first use
    async fn slot(&self, network: &str) -> Slot {
        let mut slots = self.slots.lock().await;
        slots
            .entry(network.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(None)))
            .clone()
    }

    /// Locks a network's slot for exclusive access.
    ///
    /// The resolver holds this guard across block resolution, parsing, and
    /// the memo update, serializing block-scoped lookups per network. The
    /// registry lock is dropped before the slot lock is awaited, so slow
    /// work on one network never blocks slot creation for another.
    pub async fn lock(&self, network: &str) -> OwnedMutexGuard<Option<MemoEntry>> {
        self.slot(network).await.lock_owned().await
    }

    /// Returns a copy of the memoized entry for a network, if any
    pub async fn get(&self, network: &str) -> Option<MemoEntry> {
        self.lock(network).await.clone()
    }

    /// Replaces the memoized entry for a network
    pub async fn set(&self, network: &str, entry: MemoEntry) {
        let mut slot = self.lock(network).await;
        debug!(network, block_id = %entry.block_id, "Memoizing last resolved block");
        *slot = Some(entry);
    }

    /// Discards the memoized entry for a network
    pub async fn invalidate(&self, network: &str) {
        let mut slot = self.lock(network).await;
        if let Some(entry) = slot.take() {
            debug!(network, block_id = %entry.block_id, "Invalidating last-block memo");
        }
    }
}
