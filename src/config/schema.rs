//! Configuration schema types
//!
//! This module defines the configuration structure for leadflow.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};

/// Main leadflow configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadflowConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Conversion engine connection
    pub engine: EngineConfig,

    /// Batch limits
    #[serde(default)]
    pub batch: BatchConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl LeadflowConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.engine.validate()?;
        self.batch.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (map and validate, never call the engine)
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Conversion engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Base URL of the engine API
    pub base_url: String,

    /// Path of the batch conversion endpoint, appended to `base_url`
    #[serde(default = "default_convert_path")]
    pub convert_path: String,

    /// Bearer token sent with every request (optional)
    #[serde(default)]
    pub api_token: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// TLS certificate verification enabled
    ///
    /// Only disable against development engines with self-signed certificates.
    #[serde(default = "default_true")]
    pub tls_verify: bool,
}

impl EngineConfig {
    /// Creates an engine configuration with defaults for everything but the URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            convert_path: default_convert_path(),
            api_token: None,
            timeout_seconds: default_timeout_seconds(),
            tls_verify: true,
        }
    }

    /// Full URL of the conversion endpoint
    pub fn convert_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.convert_path
        )
    }

    fn validate(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        if self.base_url.is_empty() {
            return Err("engine.base_url cannot be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("engine.base_url must start with http:// or https://".to_string());
        }

        url::Url::parse(&self.base_url)
            .map_err(|e| format!("engine.base_url is not a valid URL: {e}"))?;

        if !self.convert_path.starts_with('/') {
            return Err("engine.convert_path must start with '/'".to_string());
        }

        if self.timeout_seconds == 0 || self.timeout_seconds > 3600 {
            return Err(format!(
                "engine.timeout_seconds must be between 1 and 3600, got {}",
                self.timeout_seconds
            ));
        }

        if let Some(token) = &self.api_token {
            if token.expose_secret().is_empty() {
                return Err("engine.api_token cannot be blank when set".to_string());
            }
        }

        Ok(())
    }
}

/// Batch limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Largest batch accepted in a single engine call
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_batch_size: default_max_batch_size(),
        }
    }
}

impl BatchConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_batch_size == 0 || self.max_batch_size > 10_000 {
            return Err(format!(
                "batch.max_batch_size must be between 1 and 10000, got {}",
                self.max_batch_size
            ));
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write JSON logs to rolling files
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation (daily or hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled = true".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_convert_path() -> String {
    "/lead-conversions".to_string()
}

fn default_true() -> bool {
    true
}

fn default_timeout_seconds() -> u64 {
    120
}

fn default_max_batch_size() -> usize {
    100
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
