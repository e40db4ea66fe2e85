//! External system integrations for leadflow.
//!
//! - [`engine`] - lead conversion engine (trait-based, with an HTTP backend)
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external dependencies and
//! enable testing with mock implementations. Core logic only sees the
//! [`engine::ConversionEngine`] trait.
//!
//! ```rust,no_run
//! use leadflow::adapters::engine::{ConversionEngine, HttpConversionEngine};
//! use leadflow::config::EngineConfig;
//! use std::sync::Arc;
//!
//! # fn example() -> leadflow::domain::Result<()> {
//! let config = EngineConfig::new("https://crm.example.com/api");
//! let engine: Arc<dyn ConversionEngine> = Arc::new(HttpConversionEngine::new(config)?);
//! # Ok(())
//! # }
//! ```

pub mod engine;
