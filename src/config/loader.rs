//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::LeadflowConfig;
use super::secret::secret_string;
use crate::domain::errors::LeadflowError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into LeadflowConfig
/// 4. Applies environment variable overrides (LEADFLOW_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns a configuration error if the file cannot be read or parsed,
/// a referenced variable is unset, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use leadflow::config::loader::load_config;
///
/// let config = load_config("leadflow.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<LeadflowConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LeadflowError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        LeadflowError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: LeadflowConfig = toml::from_str(&contents)
        .map_err(|e| LeadflowError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        LeadflowError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied through untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| LeadflowError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(LeadflowError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using LEADFLOW_* prefix
///
/// Environment variables follow the pattern: LEADFLOW_<SECTION>_<KEY>,
/// for example LEADFLOW_ENGINE_BASE_URL. Unparseable numeric and boolean
/// values are ignored and the file value is kept.
fn apply_env_overrides(config: &mut LeadflowConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("LEADFLOW_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("LEADFLOW_APPLICATION_DRY_RUN") {
        if let Ok(dry_run) = val.parse() {
            config.application.dry_run = dry_run;
        }
    }

    // Engine overrides
    if let Ok(val) = std::env::var("LEADFLOW_ENGINE_BASE_URL") {
        config.engine.base_url = val;
    }
    if let Ok(val) = std::env::var("LEADFLOW_ENGINE_CONVERT_PATH") {
        config.engine.convert_path = val;
    }
    if let Ok(val) = std::env::var("LEADFLOW_ENGINE_API_TOKEN") {
        config.engine.api_token = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("LEADFLOW_ENGINE_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.engine.timeout_seconds = timeout;
        }
    }
    if let Ok(val) = std::env::var("LEADFLOW_ENGINE_TLS_VERIFY") {
        if let Ok(verify) = val.parse() {
            config.engine.tls_verify = verify;
        }
    }

    // Batch overrides
    if let Ok(val) = std::env::var("LEADFLOW_BATCH_MAX_BATCH_SIZE") {
        if let Ok(size) = val.parse() {
            config.batch.max_batch_size = size;
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("LEADFLOW_LOGGING_LOCAL_ENABLED") {
        if let Ok(enabled) = val.parse() {
            config.logging.local_enabled = enabled;
        }
    }
    if let Ok(val) = std::env::var("LEADFLOW_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
