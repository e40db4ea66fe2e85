//! Domain models and types for leadflow.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`SourceId`], [`RecordId`])
//! - **Caller-facing shapes** ([`ConversionRequest`], [`ConversionOutcome`])
//! - **Field documentation** ([`schema`]) for interface descriptions
//! - **Error types** ([`LeadflowError`], [`EngineError`])
//! - **Result type alias** ([`Result`])
//!
//! # Mandatory Fields
//!
//! `sourceId` and `convertedStatus` are plain (non-optional) fields, so a
//! request missing either one never deserializes:
//!
//! ```rust
//! use leadflow::domain::ConversionRequest;
//!
//! let missing = serde_json::from_str::<ConversionRequest>(r#"{"sourceId": "L1"}"#);
//! assert!(missing.is_err());
//! ```
//!
//! # Builder Pattern
//!
//! ```rust
//! use leadflow::domain::{ConversionRequest, SourceId};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let request = ConversionRequest::builder()
//!     .source_id(SourceId::new("L2")?)
//!     .converted_status("Qualified")
//!     .opportunity_name("Big Deal")
//!     .build()?;
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod errors;
pub mod ids;
pub mod outcome;
pub mod request;
pub mod result;
pub mod schema;

// Re-export commonly used types for convenience
pub use errors::{ElementFailure, EngineError, LeadflowError};
pub use ids::{RecordId, SourceId};
pub use outcome::ConversionOutcome;
pub use request::{ConversionRequest, ConversionRequestBuilder};
pub use result::Result;
pub use schema::FieldDoc;
