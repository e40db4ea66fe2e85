//! Domain error types
//!
//! This module defines the error hierarchy for leadflow.
//! All errors are domain-specific and don't expose third-party types.

use super::ids::SourceId;
use thiserror::Error;

/// Main leadflow error type
///
/// This is the primary error type used throughout the application.
/// It wraps engine failures and provides context for error handling.
#[derive(Debug, Error)]
pub enum LeadflowError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A request inside a batch failed validation
    #[error("Validation error: request {index}: {message}")]
    InvalidRequest { index: usize, message: String },

    /// Validation errors that are not tied to a single request
    #[error("Validation error: {0}")]
    Validation(String),

    /// Conversion engine errors
    #[error("Conversion engine error: {0}")]
    Engine(#[from] EngineError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl LeadflowError {
    /// Returns true for validation failures raised before the engine is called
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LeadflowError::InvalidRequest { .. } | LeadflowError::Validation(_)
        )
    }

    /// Returns true when the engine refused one or more elements of a batch
    pub fn is_engine_rejection(&self) -> bool {
        matches!(self, LeadflowError::Engine(e) if e.is_rejection())
    }
}

/// Conversion engine errors
///
/// Either a structured rejection of specific batch elements, or a
/// system-level fault. Neither carries third-party client types.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine refused one or more elements; nothing was committed
    #[error("Batch rejected: {}", format_failures(.failures))]
    Rejected { failures: Vec<ElementFailure> },

    /// The engine could not be reached
    #[error("Engine unavailable: {0}")]
    Unavailable(String),

    /// The engine did not answer in time
    #[error("Engine request timed out: {0}")]
    Timeout(String),

    /// The engine answered with something that cannot be interpreted
    #[error("Invalid engine response: {0}")]
    InvalidResponse(String),

    /// Any other engine-side fault
    #[error("Engine failure: {0}")]
    System(String),
}

impl EngineError {
    /// Returns true if this is an element-level rejection
    pub fn is_rejection(&self) -> bool {
        matches!(self, EngineError::Rejected { .. })
    }

    /// Per-element failures, empty for system faults
    pub fn failures(&self) -> &[ElementFailure] {
        match self {
            EngineError::Rejected { failures } => failures,
            _ => &[],
        }
    }
}

/// Reason the engine gave for refusing one batch element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementFailure {
    /// Position of the element in the submitted batch
    pub index: usize,

    /// Source record the element referred to, when the engine reports it
    pub source_id: Option<SourceId>,

    /// Human-readable reason
    pub message: String,
}

impl ElementFailure {
    /// Creates a new element failure
    pub fn new(index: usize, message: impl Into<String>) -> Self {
        Self {
            index,
            source_id: None,
            message: message.into(),
        }
    }

    /// Sets the source ID
    pub fn with_source_id(mut self, source_id: SourceId) -> Self {
        self.source_id = Some(source_id);
        self
    }
}

impl std::fmt::Display for ElementFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.source_id {
            Some(id) => write!(f, "[{}] {}: {}", self.index, id, self.message),
            None => write!(f, "[{}] {}", self.index, self.message),
        }
    }
}

fn format_failures(failures: &[ElementFailure]) -> String {
    if failures.is_empty() {
        return "no reason given".to_string();
    }
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// Conversion from std::io::Error
impl From<std::io::Error> for LeadflowError {
    fn from(err: std::io::Error) -> Self {
        LeadflowError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for LeadflowError {
    fn from(err: serde_json::Error) -> Self {
        LeadflowError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for LeadflowError {
    fn from(err: toml::de::Error) -> Self {
        LeadflowError::Configuration(format!("TOML parse error: {err}"))
    }
}
