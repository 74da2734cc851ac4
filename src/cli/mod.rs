//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Ingesta using clap.
//! All pipeline settings come from the environment; the CLI only selects
//! the action and the log level.

pub mod commands;

use clap::{Parser, Subcommand};

/// Ingesta - MongoDB to S3 NDJSON export tool
#[derive(Parser, Debug)]
#[command(name = "ingesta")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", env = "INGESTA_LOG_LEVEL")]
    pub log_level: String,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export the configured collections and upload them to S3
    Export(commands::export::ExportArgs),

    /// Validate the environment configuration without touching the network
    ValidateConfig(commands::validate::ValidateArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_export() {
        let cli = Cli::parse_from(["ingesta", "export"]);
        assert_eq!(cli.log_level, "info");
        assert!(matches!(cli.command, Commands::Export(_)));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["ingesta", "--log-level", "debug", "export"]);
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["ingesta", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }
}
