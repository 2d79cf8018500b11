//! Expected-Output Extraction
//!
//! Pure fold over block contents: identify denomination-bearing outputs and
//! record the outpoints whose retention window has elapsed. Outputs younger
//! than their window are expected to exist and are out of scope for the run.

use tracing::warn;

use lib_denomination::{decompose, lockup_adjusted_value, window_elapsed, NUM_DENOMINATIONS};
use lib_types::{Block, BlockHeight, OutPoint, Transaction, TxKind};

/// Synthetic output indices are recorded only while strictly below this
/// bound. Outputs beyond it are not tracked; this is a hard cap, not an
/// error.
pub const MAX_OUTPUT_INDEX: u32 = u16::MAX as u32;

/// Expected outpoints of one denomination, split by classification.
#[derive(Debug, Clone, Default)]
pub struct ExpectedOutputs {
    /// Literal outputs of ordinary ledger transactions; must be pruned once
    /// their window elapses.
    pub ordinary: Vec<OutPoint>,
    /// Coinbase/conversion-derived outputs; must never be pruned.
    pub derived: Vec<OutPoint>,
}

/// Expected-outpoint set for a full scan, keyed by denomination.
///
/// Grows monotonically while blocks are scanned in height order; outpoints
/// within a denomination therefore stay in block-height order.
#[derive(Debug, Clone)]
pub struct ExpectedSet {
    per_denomination: [ExpectedOutputs; NUM_DENOMINATIONS],
}

impl Default for ExpectedSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpectedSet {
    pub fn new() -> Self {
        Self {
            per_denomination: std::array::from_fn(|_| ExpectedOutputs::default()),
        }
    }

    /// Expected outputs recorded for a denomination.
    pub fn denomination(&self, denomination: u8) -> &ExpectedOutputs {
        &self.per_denomination[denomination as usize]
    }

    /// Total number of recorded outpoints across all denominations.
    pub fn len(&self) -> usize {
        self.per_denomination
            .iter()
            .map(|e| e.ordinary.len() + e.derived.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fold one block into the expected set.
    ///
    /// `current_height` is the tip reference captured once at the start of
    /// the run; it decides per-denomination window eligibility.
    pub fn scan_block(&mut self, block: &Block, current_height: BlockHeight) {
        for tx in &block.transactions {
            if tx.is_denomination_source() {
                self.scan_derived(tx, block.height, current_height);
            } else if tx.kind == TxKind::Ledger {
                self.scan_ordinary(tx, block.height, current_height);
            }
        }
    }

    /// Synthesize the decomposition outputs of a coinbase or conversion
    /// transaction, largest denomination first, indices starting at 0.
    fn scan_derived(&mut self, tx: &Transaction, height: BlockHeight, current_height: BlockHeight) {
        let value = match tx.kind {
            TxKind::Coinbase => match lockup_adjusted_value(tx.value, tx.lockup_byte, height) {
                Ok(value) => value,
                Err(err) => {
                    warn!(tx = %tx.hash, %err, "skipping coinbase with invalid lockup byte");
                    return;
                }
            },
            // Conversion value is used as-is.
            _ => tx.value,
        };

        let counts = decompose(value);
        let mut index: u32 = 0;
        'denominations: for denomination in (0..NUM_DENOMINATIONS as u8).rev() {
            for _ in 0..counts[denomination as usize] {
                if index >= MAX_OUTPUT_INDEX {
                    break 'denominations;
                }
                if window_check(height, current_height, denomination, tx) {
                    self.per_denomination[denomination as usize]
                        .derived
                        .push(OutPoint::new(tx.hash, index));
                }
                index += 1;
            }
        }
    }

    /// Record literal ledger-scoped outputs of an ordinary transaction.
    fn scan_ordinary(&mut self, tx: &Transaction, height: BlockHeight, current_height: BlockHeight) {
        for (position, output) in tx.outputs.iter().enumerate() {
            if !output.scope.is_ledger() {
                continue;
            }
            if window_check(height, current_height, output.denomination, tx) {
                self.per_denomination[output.denomination as usize]
                    .ordinary
                    .push(OutPoint::new(tx.hash, position as u32));
            }
        }
    }
}

/// Trim-window gate. An out-of-range denomination is node data we cannot
/// classify: logged and skipped, never fatal.
fn window_check(
    height: BlockHeight,
    current_height: BlockHeight,
    denomination: u8,
    tx: &Transaction,
) -> bool {
    match window_elapsed(height, current_height, denomination) {
        Ok(elapsed) => elapsed,
        Err(err) => {
            warn!(tx = %tx.hash, %err, "skipping output with unknown denomination");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_denomination::{trim_depth, MAX_DENOMINATION};
    use lib_types::{Address, AddressScope, TxHash, TxOutput};

    fn ledger_output(denomination: u8) -> TxOutput {
        TxOutput {
            address: Address::new([7; 32]),
            scope: AddressScope::Ledger,
            denomination,
        }
    }

    fn ordinary_tx(hash_byte: u8, outputs: Vec<TxOutput>) -> Transaction {
        Transaction {
            hash: TxHash::new([hash_byte; 32]),
            kind: TxKind::Ledger,
            destination_scope: AddressScope::Ledger,
            value: 0,
            lockup_byte: 0,
            outputs,
        }
    }

    fn coinbase_tx(hash_byte: u8, value: u128) -> Transaction {
        Transaction {
            hash: TxHash::new([hash_byte; 32]),
            kind: TxKind::Coinbase,
            destination_scope: AddressScope::Ledger,
            value,
            lockup_byte: 0,
            outputs: Vec::new(),
        }
    }

    fn block_at(height: BlockHeight, transactions: Vec<Transaction>) -> Block {
        Block { height, transactions }
    }

    #[test]
    fn window_gate_holds_at_boundary() {
        let denomination = 5;
        let depth = trim_depth(denomination).unwrap();
        let current = 10_000;

        let mut set = ExpectedSet::new();
        let eligible = block_at(
            current - depth,
            vec![ordinary_tx(1, vec![ledger_output(denomination)])],
        );
        let too_young = block_at(
            current - depth + 1,
            vec![ordinary_tx(2, vec![ledger_output(denomination)])],
        );
        set.scan_block(&eligible, current);
        set.scan_block(&too_young, current);

        let outputs = set.denomination(denomination);
        assert_eq!(outputs.ordinary.len(), 1);
        assert_eq!(outputs.ordinary[0], OutPoint::new(TxHash::new([1; 32]), 0));
    }

    #[test]
    fn non_ledger_scope_outputs_are_ignored() {
        let mut set = ExpectedSet::new();
        let mut foreign = ledger_output(0);
        foreign.scope = AddressScope::External;
        let block = block_at(1, vec![ordinary_tx(1, vec![foreign, ledger_output(0)])]);
        set.scan_block(&block, 100_000);

        let outputs = set.denomination(0);
        assert_eq!(outputs.ordinary.len(), 1);
        // Output position is preserved even when earlier outputs are skipped.
        assert_eq!(outputs.ordinary[0].output_index, 1);
    }

    #[test]
    fn derived_indices_descend_denominations() {
        // 1_000_011 = 1x1M + 2x5 + 1x1: indices 0,1,2,3 from largest down.
        let mut set = ExpectedSet::new();
        let block = block_at(1, vec![coinbase_tx(9, 1_000_011)]);
        set.scan_block(&block, 100_000);

        let hash = TxHash::new([9; 32]);
        assert_eq!(set.denomination(12).derived, vec![OutPoint::new(hash, 0)]);
        assert_eq!(
            set.denomination(1).derived,
            vec![OutPoint::new(hash, 1), OutPoint::new(hash, 2)]
        );
        assert_eq!(set.denomination(0).derived, vec![OutPoint::new(hash, 3)]);
    }

    #[test]
    fn derived_indices_stop_at_cap() {
        // 70_000 units of the largest denomination exceed the index cap.
        let value = 70_000u128 * 1_000_000;
        let mut set = ExpectedSet::new();
        let block = block_at(1, vec![coinbase_tx(3, value)]);
        set.scan_block(&block, 100_000);

        let derived = &set.denomination(MAX_DENOMINATION).derived;
        assert_eq!(derived.len(), MAX_OUTPUT_INDEX as usize);
        for outpoint in derived {
            assert!(outpoint.output_index < MAX_OUTPUT_INDEX);
        }
        assert_eq!(set.len(), MAX_OUTPUT_INDEX as usize);
    }

    #[test]
    fn conversion_value_is_not_lockup_adjusted() {
        let mut tx = coinbase_tx(4, 10_000);
        tx.kind = TxKind::Conversion;
        tx.lockup_byte = 3; // would add 25% to a coinbase

        let mut set = ExpectedSet::new();
        set.scan_block(&block_at(2_000, vec![tx]), 100_000);

        // 10_000 decomposes to a single denomination-8 output.
        assert_eq!(set.denomination(8).derived.len(), 1);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn coinbase_with_invalid_lockup_byte_is_skipped() {
        let mut tx = coinbase_tx(5, 10_000);
        tx.lockup_byte = 200;

        let mut set = ExpectedSet::new();
        set.scan_block(&block_at(2_000, vec![tx]), 100_000);
        assert!(set.is_empty());
    }

    #[test]
    fn external_transactions_contribute_nothing() {
        let mut tx = coinbase_tx(6, 10_000);
        tx.kind = TxKind::External;

        let mut set = ExpectedSet::new();
        set.scan_block(&block_at(1, vec![tx]), 100_000);
        assert!(set.is_empty());
    }
}
