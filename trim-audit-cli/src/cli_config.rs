//! CLI configuration loader

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::{CliError, CliResult};

/// Default config filename in the working directory
pub const DEFAULT_CONFIG_FILENAME: &str = "trim-audit.toml";

/// Top-level config: the list of nodes to audit
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct AuditConfig {
    #[serde(default)]
    pub nodes: Vec<NodeSpec>,
}

/// One target endpoint with a human-readable label
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct NodeSpec {
    pub label: String,
    pub address: String,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_FILENAME)
}

/// Load the config. An explicitly-passed path must exist; a missing default
/// path yields an empty config.
pub fn load_config(path: Option<&str>) -> CliResult<AuditConfig> {
    let config_path = path.map(PathBuf::from).unwrap_or_else(default_config_path);

    if !config_path.exists() {
        if path.is_some() {
            return Err(CliError::ConfigError(format!(
                "Configuration file not found: {}",
                config_path.display()
            )));
        }
        return Ok(AuditConfig::default());
    }

    let raw = fs::read_to_string(&config_path)
        .map_err(|e| CliError::ConfigError(format!("Failed to read config: {}", e)))?;

    toml::from_str(&raw)
        .map_err(|e| CliError::ConfigError(format!("Invalid CLI config: {}", e)))
}
