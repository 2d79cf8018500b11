//! Structured error types for the trim audit CLI

use thiserror::Error;

/// CLI error types with proper context
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("No endpoints to audit; pass --endpoint or list [[nodes]] in the config file")]
    NoEndpoints,
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_carries_context() {
        let err = CliError::ConfigError("missing field `address`".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: missing field `address`"
        );
    }
}
