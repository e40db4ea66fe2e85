//! Error context extension trait
//!
//! Adds `.context()` and `.with_context()` to results whose error converts
//! into [`LeadflowError`], keeping library code on the crate's own error type
//! instead of `anyhow`.
//!
//! # Examples
//!
//! ```rust
//! use leadflow::domain::Result;
//! use leadflow::domain::context::ResultExt;
//!
//! fn read_batch(path: &str) -> Result<String> {
//!     std::fs::read_to_string(path)
//!         .with_context(|| format!("Failed to read request batch: {}", path))
//! }
//! ```

use crate::domain::errors::LeadflowError;
use crate::domain::result::Result;

/// Extension trait for adding context to `Result` types
pub trait ResultExt<T> {
    /// Add context to an error
    ///
    /// The context is evaluated eagerly; use `.with_context()` when it is
    /// expensive to build.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static;

    /// Add context to an error, building it only when an error occurs
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

/// Works for any error convertible to [`LeadflowError`], including
/// [`EngineError`](crate::domain::EngineError) and `std::io::Error`.
///
/// Validation errors keep their variant so callers can still tell a bad
/// batch from a system fault; every other error becomes
/// [`LeadflowError::Other`].
impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<LeadflowError>,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| wrap(e.into(), context))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| wrap(e.into(), f()))
    }
}

fn wrap(error: LeadflowError, context: impl std::fmt::Display) -> LeadflowError {
    match error {
        LeadflowError::Validation(msg) => LeadflowError::Validation(format!("{context}: {msg}")),
        LeadflowError::InvalidRequest { index, message } => LeadflowError::InvalidRequest {
            index,
            message: format!("{context}: {message}"),
        },
        other => LeadflowError::Other(format!("{context}: {other}")),
    }
}
