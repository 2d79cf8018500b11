//! Denomination Errors

use thiserror::Error;

/// Error during denomination lookups
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DenominationError {
    #[error("unknown denomination: {0}")]
    UnknownDenomination(u8),

    #[error("unknown lockup byte: {0}")]
    UnknownLockupByte(u8),
}

/// Result type for denomination operations
pub type DenominationResult<T> = Result<T, DenominationError>;
