//! Convert command implementation
//!
//! This module implements the `convert` command: it reads a JSON array of
//! conversion requests, submits them as one all-or-none batch and writes a
//! JSON array of outcomes in request order.

use super::{exit_code_for, EXIT_INVALID, EXIT_SUCCESS};
use crate::adapters::engine::{ConversionEngine, HttpConversionEngine};
use crate::config::LeadflowConfig;
use crate::core::convert::BatchConverter;
use crate::domain::context::ResultExt;
use crate::domain::{ConversionRequest, LeadflowError, Result};
use clap::Args;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

/// Arguments for the convert command
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// JSON file holding an array of conversion requests, or "-" for stdin
    #[arg(short, long)]
    pub input: String,

    /// Write outcomes to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Dry run mode - validate and map the batch without calling the engine
    #[arg(long)]
    pub dry_run: bool,
}

impl ConvertArgs {
    /// Execute the convert command with the already loaded configuration
    pub async fn execute(&self, config: Result<LeadflowConfig>) -> anyhow::Result<i32> {
        tracing::info!("Starting convert command");

        let mut config = match config {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(EXIT_INVALID);
            }
        };

        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }

        let engine = match HttpConversionEngine::new(config.engine.clone()) {
            Ok(engine) => engine,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create conversion engine client");
                eprintln!("Failed to initialize conversion engine client: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        self.execute_with(&config, Arc::new(engine)).await
    }

    /// Execute against an already constructed engine
    pub async fn execute_with(
        &self,
        config: &LeadflowConfig,
        engine: Arc<dyn ConversionEngine>,
    ) -> anyhow::Result<i32> {
        let requests = match self.read_requests() {
            Ok(requests) => requests,
            Err(e) => {
                tracing::error!(error = %e, input = %self.input, "Failed to read requests");
                eprintln!("Failed to read requests: {e}");
                return Ok(EXIT_INVALID);
            }
        };

        if let Err(e) = self.check_output() {
            tracing::error!(error = %e, "Output destination is not writable");
            eprintln!("Cannot write outcomes: {e}");
            return Ok(EXIT_INVALID);
        }

        let converter = BatchConverter::new(engine, &config.batch);

        if config.application.dry_run {
            tracing::info!("Dry run mode enabled - the engine will not be called");
            eprintln!("🔍 DRY RUN MODE - No records will be converted");

            return match converter.prepare(&requests) {
                Ok(mapped) => {
                    self.write_output(&serde_json::to_string_pretty(&mapped)?);
                    eprintln!("✅ {} requests validated and mapped", mapped.len());
                    Ok(EXIT_SUCCESS)
                }
                Err(e) => Ok(report_failure(&e)),
            };
        }

        eprintln!("🚀 Converting {} records...", requests.len());

        let report = match converter.run(&requests).await {
            Ok(report) => report,
            Err(e) => return Ok(report_failure(&e)),
        };

        // The batch is committed from here on, so outcomes must reach the user
        self.write_output(&serde_json::to_string_pretty(&report.outcomes)?);

        let summary = &report.summary;
        eprintln!();
        eprintln!("📊 Conversion Summary:");
        eprintln!("  Batch: {}", summary.batch_id);
        eprintln!("  Converted: {}", summary.total);
        eprintln!("  Accounts linked: {}", summary.accounts_linked);
        eprintln!("  Contacts linked: {}", summary.contacts_linked);
        eprintln!("  Opportunities created: {}", summary.opportunities_created);
        eprintln!(
            "  Opportunities suppressed: {}",
            summary.opportunities_suppressed
        );
        eprintln!("  Duration: {:.2}s", summary.duration.as_secs_f64());

        Ok(EXIT_SUCCESS)
    }

    fn read_requests(&self) -> Result<Vec<ConversionRequest>> {
        let raw = if self.input == "-" {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        } else {
            std::fs::read_to_string(&self.input)
                .with_context(|| format!("Failed to read {}", self.input))?
        };

        serde_json::from_str(&raw).map_err(LeadflowError::from)
    }

    /// Reject an output path that cannot be written before anything is submitted
    fn check_output(&self) -> Result<()> {
        let Some(output) = &self.output else {
            return Ok(());
        };
        let path = Path::new(output);
        if path.is_dir() {
            return Err(LeadflowError::Validation(format!(
                "output {output} is a directory"
            )));
        }
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !parent.is_dir() {
            return Err(LeadflowError::Validation(format!(
                "output directory {} does not exist",
                parent.display()
            )));
        }
        Ok(())
    }

    /// Write to the output file, falling back to stdout if that fails
    ///
    /// Returns whether the file was written.
    fn write_output(&self, json: &str) -> bool {
        let Some(path) = &self.output else {
            println!("{json}");
            return false;
        };

        match std::fs::write(path, format!("{json}\n"))
            .with_context(|| format!("Failed to write {path}"))
        {
            Ok(()) => {
                eprintln!("✅ Output written to {path}");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, output = %path, "Writing outcomes to stdout instead");
                eprintln!("⚠️  {e}; writing outcomes to stdout instead");
                println!("{json}");
                false
            }
        }
    }
}

fn report_failure(error: &LeadflowError) -> i32 {
    match error {
        LeadflowError::Engine(engine_err) if engine_err.is_rejection() => {
            eprintln!("❌ Batch rejected, nothing was converted");
            for failure in engine_err.failures() {
                eprintln!("   {failure}");
            }
        }
        other if other.is_validation() => {
            eprintln!("❌ Batch failed validation, the engine was not called");
            eprintln!("   {other}");
        }
        other => {
            crate::log_error_with_context!(other, "Batch conversion failed");
            eprintln!("❌ Conversion failed: {other}");
        }
    }
    exit_code_for(error)
}
