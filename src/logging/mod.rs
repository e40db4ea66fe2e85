//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Configurable log levels
//! - Local JSON file logging with rotation
//! - Batch correlation through a `batch_id` field
//!
//! # Example
//!
//! ```no_run
//! use leadflow::logging::init_logging;
//! use leadflow::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of a batch call
///
/// # Example
///
/// ```no_run
/// use leadflow::log_batch_start;
///
/// let batch_id = uuid::Uuid::new_v4();
/// log_batch_start!(batch_id, 25);
/// ```
#[macro_export]
macro_rules! log_batch_start {
    ($batch_id:expr, $batch_size:expr) => {
        tracing::info!(
            batch_id = %$batch_id,
            batch_size = $batch_size,
            "Starting batch conversion"
        );
    };
}

/// Log the completion of a batch call
///
/// # Example
///
/// ```no_run
/// use leadflow::log_batch_complete;
/// use std::time::Duration;
///
/// let batch_id = uuid::Uuid::new_v4();
/// log_batch_complete!(batch_id, 25, Duration::from_millis(840));
/// ```
#[macro_export]
macro_rules! log_batch_complete {
    ($batch_id:expr, $count:expr, $duration:expr) => {
        tracing::info!(
            batch_id = %$batch_id,
            count = $count,
            duration_ms = $duration.as_millis() as u64,
            "Batch conversion completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use leadflow::log_error_with_context;
/// use leadflow::domain::LeadflowError;
///
/// let error = LeadflowError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
