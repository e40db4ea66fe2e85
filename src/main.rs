// Leadflow - All-or-none batch lead conversion client
// Copyright (c) 2025 Leadflow Contributors
// Licensed under the MIT License

use clap::Parser;
use leadflow::cli::{Cli, Commands};
use leadflow::config::{load_config, LeadflowConfig, LoggingConfig};
use leadflow::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Commands that read the config also take their log settings from it.
    // A broken config is reported by the command itself, so fall back here.
    let loaded = cli.command.needs_config().then(|| load_config(&cli.config));
    let (config_level, logging_config) = match &loaded {
        Some(Ok(config)) => (
            Some(config.application.log_level.clone()),
            config.logging.clone(),
        ),
        _ => (None, LoggingConfig::default()),
    };

    let log_level = cli
        .log_level
        .clone()
        .or(config_level)
        .unwrap_or_else(|| "info".to_string());

    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Leadflow - All-or-none batch lead conversion client"
    );

    let exit_code = match execute_command(&cli, loaded).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5
        }
    };

    // process::exit skips destructors, so flush file logs first
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command with the configuration loaded at startup
async fn execute_command(
    cli: &Cli,
    loaded: Option<leadflow::domain::Result<LeadflowConfig>>,
) -> anyhow::Result<i32> {
    let config = || loaded.unwrap_or_else(|| load_config(&cli.config));
    match &cli.command {
        Commands::Convert(args) => args.execute(config()).await,
        Commands::ValidateConfig(args) => args.execute(&cli.config, config()).await,
        Commands::Describe(args) => args.execute().await,
        Commands::Init(args) => args.execute().await,
    }
}
