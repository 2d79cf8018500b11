//! Reconciliation Engine
//!
//! Queries live UTXO existence for every expected outpoint and accumulates
//! per-denomination tallies. Queries are independent and idempotent; a
//! failed lookup degrades one tally to "indeterminate" instead of aborting
//! the run.

use tracing::{debug, info, warn};

use lib_denomination::{min_trim_depth, NUM_DENOMINATIONS};
use lib_types::{BlockHeight, OutPoint};

use crate::client::LedgerRpc;
use crate::errors::{AuditError, AuditResult};
use crate::extract::ExpectedSet;

/// Tally for one denomination and one classification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassTally {
    /// Outpoints recorded in the expected set
    pub expected: u64,
    /// Outpoints still present in the live UTXO set
    pub existing: u64,
    /// Outpoints whose lookup failed; neither present nor provably pruned
    pub indeterminate: u64,
}

/// Tallies for one denomination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DenominationTally {
    pub denomination: u8,
    /// Ordinary ledger outputs; pass when none still exist
    pub ordinary: ClassTally,
    /// Coinbase/conversion-derived outputs; pass when all still exist
    pub derived: ClassTally,
}

/// Result of one audit run against one endpoint
#[derive(Debug, Clone)]
pub struct AuditReport {
    /// Tip reference captured at the start of the run
    pub current_height: BlockHeight,
    /// One entry per denomination, ascending
    pub tallies: Vec<DenominationTally>,
}

/// Run a full audit against one endpoint: capture the tip, scan historical
/// blocks in height order, then reconcile the expected set against the live
/// UTXO set.
pub async fn audit<C: LedgerRpc + ?Sized>(client: &C) -> AuditResult<AuditReport> {
    let current_height = client
        .current_height()
        .await
        .map_err(AuditError::HeightUnavailable)?;
    info!(current_height, "starting trim audit");

    // Blocks younger than the smallest retention depth cannot hold an
    // eligible output of any denomination; the per-denomination gate in the
    // extractor decides everything below this bound.
    let scan_bound = current_height.saturating_sub(min_trim_depth());

    let mut expected = ExpectedSet::new();
    for height in 1..=scan_bound {
        let block = client
            .block_by_height(height)
            .await
            .map_err(|source| AuditError::BlockFetch { height, source })?;
        expected.scan_block(&block, current_height);
    }
    debug!(
        scan_bound,
        expected = expected.len(),
        "historical scan complete"
    );

    Ok(reconcile(client, &expected, current_height).await)
}

/// Reconcile an expected set against the live UTXO set.
pub async fn reconcile<C: LedgerRpc + ?Sized>(
    client: &C,
    expected: &ExpectedSet,
    current_height: BlockHeight,
) -> AuditReport {
    let mut tallies = Vec::with_capacity(NUM_DENOMINATIONS);
    for denomination in 0..NUM_DENOMINATIONS as u8 {
        let outputs = expected.denomination(denomination);
        tallies.push(DenominationTally {
            denomination,
            ordinary: tally_class(client, &outputs.ordinary).await,
            derived: tally_class(client, &outputs.derived).await,
        });
    }
    AuditReport {
        current_height,
        tallies,
    }
}

async fn tally_class<C: LedgerRpc + ?Sized>(client: &C, outpoints: &[OutPoint]) -> ClassTally {
    let mut tally = ClassTally {
        expected: outpoints.len() as u64,
        ..ClassTally::default()
    };
    for outpoint in outpoints {
        match client.utxo_at(*outpoint).await {
            Ok(Some(_)) => tally.existing += 1,
            Ok(None) => {}
            Err(err) => {
                warn!(outpoint = %outpoint, %err, "UTXO lookup failed; counting as indeterminate");
                tally.indeterminate += 1;
            }
        }
    }
    tally
}
