//! Denomination Schedule
//!
//! Fixed value tiers for ledger outputs. The schedule is a 1-5-10 style coin
//! system, so greedy largest-first decomposition is exact and minimal.

use lib_types::Amount;

use crate::errors::{DenominationError, DenominationResult};

/// Base-unit value of each denomination, indexed by denomination.
pub const DENOMINATION_VALUES: [Amount; 13] = [
    1,
    5,
    10,
    50,
    100,
    500,
    1_000,
    5_000,
    10_000,
    50_000,
    100_000,
    500_000,
    1_000_000,
];

/// Number of denomination tiers.
pub const NUM_DENOMINATIONS: usize = DENOMINATION_VALUES.len();

/// Largest valid denomination index.
pub const MAX_DENOMINATION: u8 = (NUM_DENOMINATIONS - 1) as u8;

/// Base-unit value of a denomination.
pub fn denomination_value(denomination: u8) -> DenominationResult<Amount> {
    DENOMINATION_VALUES
        .get(denomination as usize)
        .copied()
        .ok_or(DenominationError::UnknownDenomination(denomination))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_is_strictly_increasing() {
        for pair in DENOMINATION_VALUES.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn smallest_denomination_is_one_base_unit() {
        // Decomposition is exact for every value only because of this.
        assert_eq!(DENOMINATION_VALUES[0], 1);
    }

    #[test]
    fn lookup_rejects_out_of_range() {
        assert_eq!(denomination_value(MAX_DENOMINATION), Ok(1_000_000));
        assert_eq!(
            denomination_value(MAX_DENOMINATION + 1),
            Err(DenominationError::UnknownDenomination(MAX_DENOMINATION + 1))
        );
    }
}
