//! Trim-Window Reconciliation Engine
//!
//! Audits a denomination-trimmed UTXO ledger through a node's RPC surface.
//! The scan walks historical blocks, rebuilds the per-denomination set of
//! outputs whose retention window has elapsed, and cross-checks the live
//! UTXO set:
//!
//! 1. **Ordinary ledger outputs** past their window must be gone; any that
//!    still exist signal a pruning defect.
//! 2. **Coinbase/conversion-derived outputs** must never be pruned; any
//!    shortfall signals improper trimming.
//!
//! # Usage
//!
//! ```ignore
//! use lib_audit::{audit, LedgerRpc};
//!
//! let report = audit(&client).await?;
//! for line in report.render() {
//!     println!("{line}");
//! }
//! ```

pub mod client;
pub mod errors;
pub mod extract;
pub mod reconcile;
pub mod report;

pub use client::{LedgerRpc, RpcError};
pub use errors::{AuditError, AuditResult};
pub use extract::{ExpectedSet, MAX_OUTPUT_INDEX};
pub use reconcile::{audit, reconcile, AuditReport, ClassTally, DenominationTally};
pub use report::Verdict;
