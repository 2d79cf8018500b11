//! Command-line argument parsing

use clap::Parser;

use crate::cli_config::{load_config, NodeSpec};
use crate::error::{CliError, CliResult};

/// Audit denomination trimming across ledger nodes
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(name = "trim-audit")]
pub struct TrimAuditCli {
    /// Node endpoint to audit, e.g. http://127.0.0.1:9001 (repeatable;
    /// bypasses the config file)
    #[arg(short, long = "endpoint")]
    pub endpoints: Vec<String>,

    /// Configuration file listing [[nodes]] entries
    #[arg(short, long, env = "TRIM_AUDIT_CONFIG")]
    pub config: Option<String>,
}

impl TrimAuditCli {
    /// Resolve the (label, address) pairs to audit. `--endpoint` flags win
    /// over the config file; the address doubles as the label for flags.
    pub fn resolve_targets(&self) -> CliResult<Vec<NodeSpec>> {
        if !self.endpoints.is_empty() {
            return Ok(self
                .endpoints
                .iter()
                .map(|address| NodeSpec {
                    label: address.clone(),
                    address: address.clone(),
                })
                .collect());
        }

        let config = load_config(self.config.as_deref())?;
        if config.nodes.is_empty() {
            return Err(CliError::NoEndpoints);
        }
        Ok(config.nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_flags_bypass_config() {
        let cli = TrimAuditCli::parse_from([
            "trim-audit",
            "--endpoint",
            "http://a:1",
            "--endpoint",
            "http://b:2",
        ]);
        let targets = cli.resolve_targets().unwrap();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].label, "http://a:1");
        assert_eq!(targets[1].address, "http://b:2");
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let cli = TrimAuditCli::parse_from(["trim-audit", "--config", "/nonexistent/audit.toml"]);
        assert!(matches!(
            cli.resolve_targets(),
            Err(CliError::ConfigError(_))
        ));
    }
}
