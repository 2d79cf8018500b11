//! Audit Errors
//!
//! Fatal conditions only: a failure here means the expected-output set would
//! be incomplete, so the run reports nothing rather than something
//! misleading. Per-outpoint lookup failures are not errors; they degrade a
//! single tally (see `reconcile`).

use thiserror::Error;

use lib_types::BlockHeight;

use crate::client::RpcError;

/// Fatal error for a single audit run
#[derive(Error, Debug)]
pub enum AuditError {
    /// No valid upper bound for the scan without the tip height
    #[error("failed to fetch current height: {0}")]
    HeightUnavailable(#[source] RpcError),

    /// Mid-scan block fetch failure; partial tallies are discarded
    #[error("failed to fetch block {height}: {source}")]
    BlockFetch {
        height: BlockHeight,
        #[source]
        source: RpcError,
    },
}

/// Result type for audit runs
pub type AuditResult<T> = Result<T, AuditError>;
