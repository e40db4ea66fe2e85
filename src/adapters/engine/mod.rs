//! Conversion engine integration
//!
//! - [`ConversionEngine`] - async trait every engine backend implements
//! - [`EngineRequest`] / [`EngineResult`] - engine-native batch element shapes
//! - [`HttpConversionEngine`] - REST implementation

pub mod http;
pub mod traits;

pub use http::HttpConversionEngine;
pub use traits::{ConversionEngine, EngineRequest, EngineResult};
