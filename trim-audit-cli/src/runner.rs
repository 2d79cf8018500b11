//! Per-Endpoint Fan-Out
//!
//! One tokio task per configured endpoint, each running the same audit
//! routine against its own client. Tasks share no state; their immutable
//! outcome records are merged only after every task has joined.

use std::time::Instant;

use anyhow::bail;
use clap::Parser;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

use lib_audit::{audit, AuditError, AuditReport};

use crate::cli::TrimAuditCli;
use crate::cli_config::NodeSpec;
use crate::rpc::HttpLedgerClient;

/// Outcome of one endpoint's audit run
#[derive(Debug)]
pub struct EndpointOutcome {
    pub label: String,
    pub result: Result<AuditReport, AuditError>,
}

/// Aggregate view across all endpoints
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Failing denomination/classification verdicts across reachable nodes
    pub failing_verdicts: usize,
    /// Endpoints whose run ended in a fatal error
    pub failed_endpoints: usize,
}

/// Audit every target concurrently and collect outcomes, sorted by label
/// for reproducible reporting.
pub async fn run_targets(targets: Vec<NodeSpec>) -> Vec<EndpointOutcome> {
    let mut join_set = JoinSet::new();
    for target in targets {
        join_set.spawn(async move {
            let client = HttpLedgerClient::new(&target.address);
            info!(label = %target.label, address = %target.address, "auditing endpoint");
            EndpointOutcome {
                label: target.label,
                result: audit(&client).await,
            }
        });
    }

    let mut outcomes = Vec::new();
    while let Some(joined) = join_set.join_next().await {
        match joined {
            Ok(outcome) => outcomes.push(outcome),
            Err(err) => error!(%err, "audit task failed to join"),
        }
    }
    outcomes.sort_by(|a, b| a.label.cmp(&b.label));
    outcomes
}

/// Merge per-endpoint outcomes into one aggregate record.
pub fn summarize(outcomes: &[EndpointOutcome]) -> RunSummary {
    let mut summary = RunSummary::default();
    for outcome in outcomes {
        match &outcome.result {
            Ok(report) => summary.failing_verdicts += report.failed_verdicts(),
            Err(_) => summary.failed_endpoints += 1,
        }
    }
    summary
}

fn print_outcomes(outcomes: &[EndpointOutcome]) {
    for outcome in outcomes {
        match &outcome.result {
            Ok(report) => {
                for line in report.render() {
                    println!("[{}] {}", outcome.label, line);
                }
            }
            Err(err) => {
                warn!(label = %outcome.label, %err, "endpoint audit aborted; nothing to report");
            }
        }
    }
}

/// Parse arguments, fan out the audit, print reports, and fail the process
/// when any verdict or endpoint failed.
pub async fn run_cli() -> anyhow::Result<()> {
    let cli = TrimAuditCli::parse();
    let targets = cli.resolve_targets()?;

    let started = Instant::now();
    let outcomes = run_targets(targets).await;
    let summary = summarize(&outcomes);

    print_outcomes(&outcomes);
    info!(
        elapsed_secs = started.elapsed().as_secs_f64(),
        endpoints = outcomes.len(),
        failing_verdicts = summary.failing_verdicts,
        failed_endpoints = summary.failed_endpoints,
        "audit complete"
    );

    if summary.failed_endpoints > 0 || summary.failing_verdicts > 0 {
        bail!(
            "{} failing verdict(s), {} unreachable endpoint(s)",
            summary.failing_verdicts,
            summary.failed_endpoints
        );
    }
    Ok(())
}
