//! Test helpers for txresolve integration tests
//!
//! Provides mock implementations of the chain and cache seams so the
//! resolution engine can be exercised without a real node, plus canned
//! genesis-block fixtures for realistic raw bytes.

use async_trait::async_trait;
use bitcoin::blockdata::constants::genesis_block;
use bitcoin::consensus::encode;
use bitcoin::Network;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use txresolve::cache::{CacheKey, CacheStats, JsonCache};
use txresolve::{CacheError, ChainClient, ChainError};

/// Initialize tracing output for tests
///
/// Respects `RUST_LOG`; safe to call from every test, only the first call
/// installs the subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Mock ChainClient with scripted responses and fetch counters
///
/// Blocks and transactions are registered up front; anything else fails the
/// fetch the way an unreachable node would. Counters record how many times
/// each fetch ran so tests can assert that cache and memo layers actually
/// short-circuited.
#[derive(Default)]
pub struct MockChainClient {
    blocks: HashMap<(String, String), Vec<u8>>,
    transactions: HashMap<(String, String), String>,
    block_fetches: AtomicUsize,
    tx_fetches: AtomicUsize,
}

impl MockChainClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a raw block under (network, block_id)
    pub fn with_block(mut self, network: &str, block_id: &str, raw: Vec<u8>) -> Self {
        self.blocks
            .insert((network.to_string(), block_id.to_string()), raw);
        self
    }

    /// Register a transaction hex under (network, transaction_id)
    pub fn with_transaction(mut self, network: &str, transaction_id: &str, hex: &str) -> Self {
        self.transactions.insert(
            (network.to_string(), transaction_id.to_string()),
            hex.to_string(),
        );
        self
    }

    pub fn block_fetches(&self) -> usize {
        self.block_fetches.load(Ordering::SeqCst)
    }

    pub fn tx_fetches(&self) -> usize {
        self.tx_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChainClient for &MockChainClient {
    async fn fetch_block(&self, network: &str, block_id: &str) -> Result<Vec<u8>, ChainError> {
        self.block_fetches.fetch_add(1, Ordering::SeqCst);
        self.blocks
            .get(&(network.to_string(), block_id.to_string()))
            .cloned()
            .ok_or_else(|| {
                ChainError::fetch_block_failed(
                    network,
                    block_id,
                    std::io::Error::new(std::io::ErrorKind::NotFound, "no such block"),
                )
            })
    }

    async fn fetch_transaction(
        &self,
        network: &str,
        transaction_id: &str,
    ) -> Result<String, ChainError> {
        self.tx_fetches.fetch_add(1, Ordering::SeqCst);
        self.transactions
            .get(&(network.to_string(), transaction_id.to_string()))
            .cloned()
            .ok_or_else(|| {
                ChainError::fetch_transaction_failed(
                    network,
                    transaction_id,
                    std::io::Error::new(std::io::ErrorKind::NotFound, "no such transaction"),
                )
            })
    }
}

/// Cache backend where every read and write fails
///
/// Used to verify the engine's availability policy: read failures degrade to
/// misses and write failures are swallowed.
#[derive(Debug, Default)]
pub struct FailingCache;

#[async_trait]
impl JsonCache for FailingCache {
    async fn get(&self, key: &CacheKey) -> Result<Option<serde_json::Value>, CacheError> {
        Err(CacheError::backend(
            format!("get {key}"),
            std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "cache down"),
        ))
    }

    async fn set(
        &self,
        key: CacheKey,
        _value: serde_json::Value,
        _ttl: Duration,
    ) -> Result<(), CacheError> {
        Err(CacheError::backend(
            format!("set {key}"),
            std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "cache down"),
        ))
    }

    async fn clear(&self) -> Result<(), CacheError> {
        Ok(())
    }

    async fn stats(&self) -> CacheStats {
        CacheStats::default()
    }

    fn name(&self) -> &'static str {
        "FailingCache"
    }
}

/// Raw consensus bytes of the mainnet genesis block
pub fn mainnet_genesis_raw() -> Vec<u8> {
    encode::serialize(&genesis_block(Network::Bitcoin))
}

/// Raw consensus bytes of the testnet genesis block (a different block,
/// useful as a second fixture)
pub fn testnet_genesis_raw() -> Vec<u8> {
    encode::serialize(&genesis_block(Network::Testnet))
}

/// Txid of the genesis coinbase transaction
pub fn genesis_coinbase_txid() -> String {
    genesis_block(Network::Bitcoin).txdata[0]
        .compute_txid()
        .to_string()
}

/// Consensus hex of the genesis coinbase transaction
pub fn genesis_coinbase_hex() -> String {
    encode::serialize_hex(&genesis_block(Network::Bitcoin).txdata[0])
}
