//! Trim audit primitives.
//! Stable, protocol-neutral, behavior-free.
//!
//! Primitive identifiers plus the consumed ledger shapes the remote node
//! serves over RPC. Nothing in this crate executes ledger logic; these are
//! the read-only views the audit walks.

pub mod ledger;
pub mod primitives;

pub use primitives::{Address, Amount, BlockHeight, Bps, TxHash};

pub use ledger::{AddressScope, Block, OutPoint, Transaction, TxKind, TxOutput, Utxo};
