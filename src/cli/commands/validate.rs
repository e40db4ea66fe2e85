//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the leadflow configuration file.

use super::{EXIT_INVALID, EXIT_SUCCESS};
use crate::config::LeadflowConfig;
use crate::domain::Result;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    ///
    /// `config` is the result of loading `config_path`.
    pub async fn execute(
        &self,
        config_path: &str,
        config: Result<LeadflowConfig>,
    ) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates as part of loading
        let config = match config {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(EXIT_INVALID);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dry Run: {}", config.application.dry_run);
        println!("  Engine Endpoint: {}", config.engine.convert_url());
        println!(
            "  Engine Token: {}",
            if config.engine.api_token.is_some() {
                "set"
            } else {
                "not set"
            }
        );
        println!("  Timeout: {}s", config.engine.timeout_seconds);
        println!("  TLS Verify: {}", config.engine.tls_verify);
        println!("  Max Batch Size: {}", config.batch.max_batch_size);
        if config.logging.local_enabled {
            println!(
                "  File Logging: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        } else {
            println!("  File Logging: disabled");
        }
        println!();

        Ok(EXIT_SUCCESS)
    }
}
