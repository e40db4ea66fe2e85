// Leadflow - All-or-none batch lead conversion client
// Copyright (c) 2025 Leadflow Contributors
// Licensed under the MIT License

//! # Leadflow - All-or-none batch lead conversion
//!
//! Leadflow converts batches of source records (leads) into related
//! destination records (account, contact and optionally opportunity) by
//! delegating the work to an external conversion engine.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Validating** caller-facing conversion requests
//! - **Mapping** them to the engine's native request shape, forwarding only
//!   the options that change what the engine does by default
//! - **Submitting** the whole batch in one all-or-none engine call
//! - **Reporting** one outcome per request, in request order
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Request mapping and batch orchestration
//! - [`adapters`] - External integrations (the conversion engine)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use leadflow::adapters::engine::HttpConversionEngine;
//! use leadflow::config::load_config;
//! use leadflow::core::convert::BatchConverter;
//! use leadflow::domain::{ConversionRequest, SourceId};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("leadflow.toml")?;
//!     let engine = Arc::new(HttpConversionEngine::new(config.engine.clone())?);
//!     let converter = BatchConverter::new(engine, &config.batch);
//!
//!     let mut request = ConversionRequest::new(SourceId::new("L1")?, "Qualified");
//!     request.create_opportunity = Some(false);
//!
//!     let outcomes = converter.convert_batch(&[request]).await?;
//!     println!("Converted {} records", outcomes.len());
//!     Ok(())
//! }
//! ```
//!
//! ## All-or-none
//!
//! Either every request in a batch is converted or none is. A rejection of
//! any element surfaces as [`domain::EngineError::Rejected`] carrying one
//! [`domain::ElementFailure`] per failing element, and no outcomes:
//!
//! ```rust,no_run
//! use leadflow::domain::{LeadflowError, EngineError};
//!
//! fn explain(error: &LeadflowError) {
//!     if let LeadflowError::Engine(EngineError::Rejected { failures }) = error {
//!         for failure in failures {
//!             eprintln!("{failure}");
//!         }
//!     }
//! }
//! ```
//!
//! ## Logging
//!
//! Leadflow uses structured logging with the `tracing` crate. Every log line
//! emitted for a batch carries its `batch_id`.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
