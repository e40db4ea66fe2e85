//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use super::{EXIT_FATAL, EXIT_INVALID, EXIT_SUCCESS};
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "leadflow.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing leadflow configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_INVALID);
        }

        match fs::write(&self.output, Self::sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} and set engine.base_url", self.output);
                println!("  2. Put LEADFLOW_ENGINE_TOKEN in the environment or a .env file");
                println!("  3. Validate configuration: leadflow validate-config");
                println!("  4. Convert a batch: leadflow convert --input requests.json");
                println!();
                Ok(EXIT_SUCCESS)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(EXIT_FATAL)
            }
        }
    }

    fn sample_config() -> &'static str {
        r#"# leadflow configuration file
# All-or-none batch lead conversion client

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# Dry run mode (validate and map batches, never call the engine)
dry_run = false

[engine]
# Base URL of the conversion engine API
base_url = "https://crm.example.com/api"

# Path of the batch conversion endpoint, appended to base_url
convert_path = "/lead-conversions"

# Bearer token (use an environment variable)
api_token = "${LEADFLOW_ENGINE_TOKEN}"

# Request timeout in seconds (1-3600)
timeout_seconds = 120

# TLS certificate verification
tls_verify = true

[batch]
# Largest batch submitted in one engine call (1-10000)
max_batch_size = 100

[logging]
# Write JSON logs to rolling files
local_enabled = false
local_path = "./logs"

# Log rotation (daily or hourly)
local_rotation = "daily"
"#
    }
}
