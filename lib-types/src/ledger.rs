//! Consumed Ledger Shapes
//!
//! Read-only views of what the node serves over RPC: blocks, transactions,
//! outputs, and live UTXO entries. The audit never constructs ledger state
//! from these, it only classifies and cross-checks them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::primitives::{Address, Amount, BlockHeight, TxHash};

/// OutPoint - Reference to a specific output in a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct OutPoint {
    /// Transaction hash containing the output
    pub tx_hash: TxHash,
    /// Index of the output in the transaction
    pub output_index: u32,
}

impl OutPoint {
    /// Create a new OutPoint
    pub const fn new(tx_hash: TxHash, output_index: u32) -> Self {
        Self { tx_hash, output_index }
    }
}

impl fmt::Display for OutPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.tx_hash, self.output_index)
    }
}

/// Scope classification of a destination, as served by the node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressScope {
    /// Participates in this value-transfer ledger
    Ledger,
    /// Belongs to another ledger the surrounding system supports
    External,
}

impl AddressScope {
    /// Whether the destination participates in this ledger
    pub fn is_ledger(&self) -> bool {
        matches!(self, AddressScope::Ledger)
    }
}

/// Transaction type tag, as served by the node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    /// Externally-originated coinbase reward
    Coinbase,
    /// Externally-originated conversion of value into this ledger
    Conversion,
    /// Other externally-originated transaction (not denomination-bearing)
    External,
    /// Ordinary ledger transaction with literal outputs
    Ledger,
}

/// A literal output recorded on an ordinary ledger transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    /// Recipient address
    pub address: Address,
    /// Scope classification of the recipient
    pub scope: AddressScope,
    /// Declared denomination of the output
    pub denomination: u8,
}

/// A transaction as served by the node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction hash
    pub hash: TxHash,
    /// Type tag
    pub kind: TxKind,
    /// Scope classification of the transaction's destination
    pub destination_scope: AddressScope,
    /// Transferred value; meaningful for coinbase and conversion transactions
    #[serde(default)]
    pub value: Amount,
    /// Lockup period selector; meaningful for coinbase transactions
    #[serde(default)]
    pub lockup_byte: u8,
    /// Literal outputs; meaningful for ordinary ledger transactions
    #[serde(default)]
    pub outputs: Vec<TxOutput>,
}

impl Transaction {
    /// Whether this transaction synthesizes denomination outputs from its
    /// value (a coinbase or conversion destined for this ledger).
    pub fn is_denomination_source(&self) -> bool {
        self.destination_scope.is_ledger()
            && matches!(self.kind, TxKind::Coinbase | TxKind::Conversion)
    }
}

/// A block as served by the node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Height of this block in the canonical chain
    pub height: BlockHeight,
    /// Transactions in block order
    pub transactions: Vec<Transaction>,
}

/// Unspent transaction output as returned by a live UTXO lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utxo {
    /// Denomination of the output
    pub denomination: u8,
    /// Owner address
    pub address: Address,
    /// Block height when created
    pub created_at: BlockHeight,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outpoint_display_joins_hash_and_index() {
        let op = OutPoint::new(TxHash::new([0x11; 32]), 7);
        assert_eq!(op.to_string(), format!("{}:7", "11".repeat(32)));
    }

    #[test]
    fn denomination_source_requires_ledger_scope() {
        let mut tx = Transaction {
            hash: TxHash::zero(),
            kind: TxKind::Coinbase,
            destination_scope: AddressScope::Ledger,
            value: 100,
            lockup_byte: 0,
            outputs: Vec::new(),
        };
        assert!(tx.is_denomination_source());

        tx.destination_scope = AddressScope::External;
        assert!(!tx.is_denomination_source());

        tx.destination_scope = AddressScope::Ledger;
        tx.kind = TxKind::Ledger;
        assert!(!tx.is_denomination_source());
    }

    #[test]
    fn transaction_json_defaults_optional_fields() {
        let raw = r#"{
            "hash": [0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0],
            "kind": "ledger",
            "destination_scope": "ledger"
        }"#;
        let tx: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(tx.value, 0);
        assert_eq!(tx.lockup_byte, 0);
        assert!(tx.outputs.is_empty());
    }
}
