//! Batch conversion
//!
//! The [`BatchConverter`] accepts an ordered batch of
//! [`ConversionRequest`](crate::domain::ConversionRequest)s, maps them, submits
//! them to the [`ConversionEngine`](crate::adapters::engine::ConversionEngine)
//! in a single all-or-none call and returns one outcome per request in the
//! same order.

pub mod batch;
pub mod phase;
pub mod summary;

pub use batch::{BatchConverter, ConversionReport};
pub use phase::BatchPhase;
pub use summary::BatchSummary;
