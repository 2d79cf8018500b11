//! Minimal Denomination Decomposition
//!
//! Greedy largest-to-smallest split of a value into denomination counts.
//! Deterministic for a given value; exact because the smallest denomination
//! is one base unit.

use lib_types::Amount;

use crate::schedule::{DENOMINATION_VALUES, NUM_DENOMINATIONS};

/// Count of outputs per denomination, indexed by denomination.
pub type DenominationCounts = [u64; NUM_DENOMINATIONS];

/// Decompose a value into minimal denomination counts.
///
/// The sum of `counts[d] * value(d)` over all denominations equals `value`.
pub fn decompose(value: Amount) -> DenominationCounts {
    let mut counts = [0u64; NUM_DENOMINATIONS];
    let mut remainder = value;
    for denomination in (0..NUM_DENOMINATIONS).rev() {
        let unit = DENOMINATION_VALUES[denomination];
        if remainder < unit {
            continue;
        }
        counts[denomination] = (remainder / unit) as u64;
        remainder %= unit;
    }
    counts
}
