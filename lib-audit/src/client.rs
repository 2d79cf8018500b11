//! Ledger RPC Seam
//!
//! The engine only talks to a node through this trait, so tests run against
//! in-memory chains and the CLI plugs in an HTTP transport. This abstraction
//! keeps lib-audit decoupled from the wire protocol.

use async_trait::async_trait;
use thiserror::Error;

use lib_types::{Block, BlockHeight, OutPoint, Utxo};

/// Error surfaced by a ledger RPC transport
#[derive(Error, Debug, Clone)]
pub enum RpcError {
    /// The requested entity does not exist (e.g. height beyond the tip)
    #[error("not found")]
    NotFound,

    /// Connectivity loss or protocol-level failure
    #[error("transport error: {0}")]
    Transport(String),
}

/// Read-only view of a remote ledger node.
///
/// Implemented by the CLI's HTTP client and by mock chains in tests.
#[async_trait]
pub trait LedgerRpc: Send + Sync {
    /// Height of the current chain tip.
    async fn current_height(&self) -> Result<BlockHeight, RpcError>;

    /// Canonical block at the given height.
    async fn block_by_height(&self, height: BlockHeight) -> Result<Block, RpcError>;

    /// Live UTXO at the given outpoint, or `None` if absent.
    async fn utxo_at(&self, outpoint: OutPoint) -> Result<Option<Utxo>, RpcError>;
}
