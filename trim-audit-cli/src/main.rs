//! Trim Audit Command-Line Interface
//!
//! Entry point for the trim-audit binary. Initializes logging, parses
//! command-line arguments, and runs the audit across configured endpoints.

use std::env;

use trim_audit_cli::run_cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt().with_env_filter(filter).init();

    run_cli().await
}
