//! Trim Policy
//!
//! Per-denomination retention depths: the number of blocks an output must
//! remain spendable before the node may prune it from the live UTXO set.
//! Depths are independent per denomination; `TRIM_DEPTHS[0]` is the largest.

use lib_types::BlockHeight;

use crate::errors::{DenominationError, DenominationResult};
use crate::schedule::NUM_DENOMINATIONS;

/// Retention depth in blocks, indexed by denomination.
pub const TRIM_DEPTHS: [BlockHeight; NUM_DENOMINATIONS] = [
    4320, 4320, 2880, 2880, 2160, 2160, 1440, 1440, 1080, 1080, 720, 720, 720,
];

/// Retention depth for a denomination.
pub fn trim_depth(denomination: u8) -> DenominationResult<BlockHeight> {
    TRIM_DEPTHS
        .get(denomination as usize)
        .copied()
        .ok_or(DenominationError::UnknownDenomination(denomination))
}

/// Largest retention depth across all denominations.
pub fn max_trim_depth() -> BlockHeight {
    TRIM_DEPTHS[0]
}

/// Smallest retention depth across all denominations. Blocks younger than
/// this cannot hold a trim-eligible output of any denomination, so it bounds
/// the historical scan.
pub fn min_trim_depth() -> BlockHeight {
    let mut min = TRIM_DEPTHS[0];
    let mut i = 1;
    while i < NUM_DENOMINATIONS {
        if TRIM_DEPTHS[i] < min {
            min = TRIM_DEPTHS[i];
        }
        i += 1;
    }
    min
}

/// Whether the retention window of an output created at `height` has elapsed
/// as of `current_height`. Holds exactly when
/// `height <= current_height - trim_depth(denomination)`.
pub fn window_elapsed(
    height: BlockHeight,
    current_height: BlockHeight,
    denomination: u8,
) -> DenominationResult<bool> {
    let depth = trim_depth(denomination)?;
    Ok(current_height >= depth && height <= current_height - depth)
}
