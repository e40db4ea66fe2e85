//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for leadflow using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// leadflow - all-or-none batch lead conversion client
#[derive(Parser, Debug)]
#[command(name = "leadflow")]
#[command(version, about, long_about = None)]
#[command(author = "Leadflow Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "leadflow.toml", env = "LEADFLOW_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "LEADFLOW_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a batch of source records through the conversion engine
    Convert(commands::convert::ConvertArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Describe the request and outcome fields
    Describe(commands::describe::DescribeArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

impl Commands {
    /// Whether the command needs the configuration file
    pub fn needs_config(&self) -> bool {
        matches!(self, Commands::Convert(_) | Commands::ValidateConfig(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_convert() {
        let cli = Cli::parse_from(["leadflow", "convert", "--input", "batch.json"]);
        assert_eq!(cli.config, "leadflow.toml");
        match cli.command {
            Commands::Convert(args) => {
                assert_eq!(args.input, "batch.json");
                assert!(args.output.is_none());
                assert!(!args.dry_run);
            }
            other => panic!("expected convert, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_convert_requires_input() {
        assert!(Cli::try_parse_from(["leadflow", "convert"]).is_err());
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["leadflow", "--config", "custom.toml", "validate-config"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["leadflow", "--log-level", "debug", "describe"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["leadflow", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
        assert!(cli.command.needs_config());
    }

    #[test]
    fn test_cli_parse_describe_json() {
        let cli = Cli::parse_from(["leadflow", "describe", "--json"]);
        match cli.command {
            Commands::Describe(args) => assert!(args.json),
            other => panic!("expected describe, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["leadflow", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
        assert!(!cli.command.needs_config());
    }
}
