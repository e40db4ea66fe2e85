//! Configuration management for leadflow.
//!
//! leadflow reads a TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `LEADFLOW_<SECTION>_<KEY>` environment overrides
//! - Default values for optional settings
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use leadflow::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("leadflow.toml")?;
//! println!("Engine: {}", config.engine.convert_url());
//! println!("Max batch size: {}", config.batch.max_batch_size);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [engine]
//! base_url = "https://crm.example.com/api"
//! api_token = "${LEADFLOW_ENGINE_TOKEN}"
//!
//! [batch]
//! max_batch_size = 100
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{ApplicationConfig, BatchConfig, EngineConfig, LeadflowConfig, LoggingConfig};
pub use secret::{secret_string, SecretString, SecretValue};
