//! Coinbase Lockup Adjustment
//!
//! Coinbase rewards carry a lockup byte selecting a lockup period; longer
//! lockups earn a basis-point bonus on the reward value. The adjusted value
//! is what gets decomposed into denomination outputs. Conversion values are
//! never adjusted.

use lib_types::{Amount, BlockHeight, Bps};

use crate::errors::{DenominationError, DenominationResult};

/// Bonus multiplier in basis points, indexed by lockup byte (10000 = 100%).
pub const LOCKUP_BONUS_BPS: [Bps; 4] = [10_000, 10_350, 11_000, 12_500];

/// Height at which the lockup bonus schedule activates. Coinbase values in
/// earlier blocks decompose unadjusted regardless of lockup byte.
pub const LOCKUP_BONUS_ACTIVATION_HEIGHT: BlockHeight = 1_000;

/// Adjust a coinbase value for its lockup bonus.
///
/// `height` is the block height of the coinbase transaction; it gates the
/// activation boundary. This is the single call site for the adjustment.
pub fn lockup_adjusted_value(
    value: Amount,
    lockup_byte: u8,
    height: BlockHeight,
) -> DenominationResult<Amount> {
    let bps = LOCKUP_BONUS_BPS
        .get(lockup_byte as usize)
        .copied()
        .ok_or(DenominationError::UnknownLockupByte(lockup_byte))?;
    if height < LOCKUP_BONUS_ACTIVATION_HEIGHT {
        return Ok(value);
    }
    Ok(value * bps as Amount / 10_000)
}
