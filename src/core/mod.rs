//! Core conversion logic for leadflow.
//!
//! # Modules
//!
//! - [`mapper`] - Caller-facing requests to engine-native requests
//! - [`convert`] - Batch orchestration, lifecycle and summaries
//!
//! # Conversion Workflow
//!
//! 1. **Validate**: Check the batch size and the mandatory fields of every request
//! 2. **Map**: Forward only the optional fields that change engine behavior
//! 3. **Submit**: Send the whole batch to the engine in one all-or-none call
//! 4. **Verify**: Check the engine answered once per request, in order
//! 5. **Report**: Return outcomes in request order plus a batch summary
//!
//! # Example
//!
//! ```rust,no_run
//! use leadflow::adapters::engine::HttpConversionEngine;
//! use leadflow::config::load_config;
//! use leadflow::core::convert::BatchConverter;
//! use leadflow::domain::{ConversionRequest, SourceId};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("leadflow.toml")?;
//! let engine = Arc::new(HttpConversionEngine::new(config.engine.clone())?);
//! let converter = BatchConverter::new(engine, &config.batch);
//!
//! let requests = vec![ConversionRequest::new(SourceId::new("L1")?, "Qualified")];
//! let outcomes = converter.convert_batch(&requests).await?;
//!
//! for outcome in outcomes {
//!     println!("{}: {:?}", outcome.source_id, outcome.account_id);
//! }
//! # Ok(())
//! # }
//! ```

pub mod convert;
pub mod mapper;
