//! Trim Audit CLI Library
//!
//! Command-line interface for the denomination trim audit: resolves target
//! endpoints from flags or a TOML config, fans out one audit task per node,
//! and prints per-denomination pass/fail reports.

pub mod cli;
pub mod cli_config;
pub mod error;
pub mod rpc;
pub mod runner;

pub use cli::TrimAuditCli;
pub use error::{CliError, CliResult};
pub use rpc::HttpLedgerClient;
pub use runner::run_cli;

/// Trim audit CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
