//! Denomination Policy
//!
//! This crate provides the static denomination data the audit consumes as
//! pure functions:
//!
//! 1. **Schedule**: the bounded set of denomination tiers and their values
//! 2. **Decomposition**: minimal greedy split of a value into denominations
//! 3. **Trim policy**: per-denomination retention depths and window gating
//! 4. **Lockup**: coinbase value adjustment before decomposition
//!
//! Nothing here is mutated at runtime and nothing performs I/O.

pub mod decompose;
pub mod errors;
pub mod lockup;
pub mod schedule;
pub mod trim;

pub use decompose::{decompose, DenominationCounts};
pub use errors::{DenominationError, DenominationResult};
pub use lockup::lockup_adjusted_value;
pub use schedule::{denomination_value, MAX_DENOMINATION, NUM_DENOMINATIONS};
pub use trim::{max_trim_depth, min_trim_depth, trim_depth, window_elapsed};
