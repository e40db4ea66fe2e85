//! All-or-none batch conversion
//!
//! This module validates and maps a batch of requests, submits it to the
//! conversion engine in a single call, and maps the engine's results back to
//! caller-facing outcomes in request order.

use super::phase::{BatchPhase, PhaseTracker};
use super::summary::BatchSummary;
use crate::adapters::engine::{ConversionEngine, EngineRequest, EngineResult};
use crate::config::BatchConfig;
use crate::core::mapper::map_batch;
use crate::domain::{ConversionOutcome, ConversionRequest, EngineError, LeadflowError, Result};
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

/// Outcomes of a successful batch call together with its summary
#[derive(Debug, Clone)]
pub struct ConversionReport {
    /// One outcome per request, in request order
    pub outcomes: Vec<ConversionOutcome>,

    /// Counts and timing for the batch
    pub summary: BatchSummary,
}

/// Batch converter
///
/// Holds no state between calls; concurrent batches are independent and the
/// engine is the only point of cross-batch consistency.
pub struct BatchConverter {
    engine: Arc<dyn ConversionEngine>,
    max_batch_size: usize,
}

impl BatchConverter {
    /// Create a new batch converter
    pub fn new(engine: Arc<dyn ConversionEngine>, config: &BatchConfig) -> Self {
        Self {
            engine,
            max_batch_size: config.max_batch_size,
        }
    }

    /// Largest batch this converter submits
    pub fn max_batch_size(&self) -> usize {
        self.max_batch_size
    }

    /// Convert a batch and return its outcomes in request order
    ///
    /// # Errors
    ///
    /// - [`LeadflowError::InvalidRequest`] / [`LeadflowError::Validation`] if
    ///   the batch fails validation; the engine is not called.
    /// - [`LeadflowError::Engine`] if the engine rejects any element or
    ///   fails; no outcomes are returned.
    pub async fn convert_batch(
        &self,
        requests: &[ConversionRequest],
    ) -> Result<Vec<ConversionOutcome>> {
        self.run(requests).await.map(|report| report.outcomes)
    }

    /// Validate and map a batch without submitting it
    ///
    /// # Errors
    ///
    /// Same validation errors as [`convert_batch`](Self::convert_batch).
    pub fn prepare(&self, requests: &[ConversionRequest]) -> Result<Vec<EngineRequest>> {
        if requests.len() > self.max_batch_size {
            return Err(LeadflowError::Validation(format!(
                "batch of {} requests exceeds the limit of {}",
                requests.len(),
                self.max_batch_size
            )));
        }
        map_batch(requests)
    }

    /// Convert a batch and return outcomes plus a summary
    ///
    /// This method:
    /// 1. Checks the batch size and maps every request (fail-fast)
    /// 2. Submits the whole batch to the engine in one call
    /// 3. Verifies the engine returned one matching result per request
    /// 4. Maps results to outcomes in request order
    pub async fn run(&self, requests: &[ConversionRequest]) -> Result<ConversionReport> {
        let batch_id = Uuid::new_v4();
        let started_at = Utc::now();
        let start = Instant::now();
        let mut tracker = PhaseTracker::new(batch_id);

        crate::log_batch_start!(batch_id, requests.len());

        let engine_requests = match self.prepare(requests) {
            Ok(mapped) => mapped,
            Err(e) => {
                tracker.advance(BatchPhase::Failed);
                tracing::warn!(
                    batch_id = %batch_id,
                    phase = %tracker.phase(),
                    error = %e,
                    "Batch failed validation"
                );
                return Err(e);
            }
        };

        let outcomes = if engine_requests.is_empty() {
            tracing::debug!(batch_id = %batch_id, "Empty batch, engine not called");
            tracker.advance(BatchPhase::Submitted);
            Vec::new()
        } else {
            tracker.advance(BatchPhase::Submitted);
            tracing::info!(
                batch_id = %batch_id,
                engine = %self.engine.describe(),
                batch_size = engine_requests.len(),
                "Submitting batch to conversion engine"
            );

            let submitted = self
                .engine
                .convert(&engine_requests)
                .await
                .and_then(|results| to_outcomes(&engine_requests, results));

            match submitted {
                Ok(outcomes) => outcomes,
                Err(e) => {
                    tracker.advance(BatchPhase::Failed);
                    log_engine_failure(batch_id, &e);
                    return Err(e.into());
                }
            }
        };

        tracker.advance(BatchPhase::Succeeded);

        let summary = BatchSummary::from_batch(batch_id, started_at, requests, &outcomes)
            .with_duration(start.elapsed());
        crate::log_batch_complete!(batch_id, summary.total, summary.duration);
        tracing::info!(
            batch_id = %batch_id,
            phase = %tracker.phase(),
            accounts_linked = summary.accounts_linked,
            contacts_linked = summary.contacts_linked,
            opportunities_created = summary.opportunities_created,
            opportunities_suppressed = summary.opportunities_suppressed,
            "Batch summary"
        );

        Ok(ConversionReport { outcomes, summary })
    }
}

/// Map engine results to outcomes, checking they line up with the requests
fn to_outcomes(
    requests: &[EngineRequest],
    results: Vec<EngineResult>,
) -> std::result::Result<Vec<ConversionOutcome>, EngineError> {
    if results.len() != requests.len() {
        return Err(EngineError::InvalidResponse(format!(
            "expected {} results, engine returned {}",
            requests.len(),
            results.len()
        )));
    }

    requests
        .iter()
        .zip(results)
        .enumerate()
        .map(|(index, (request, result))| {
            if result.source_id != request.source_id {
                return Err(EngineError::InvalidResponse(format!(
                    "result {index} is for {} but request {index} was for {}",
                    result.source_id, request.source_id
                )));
            }
            Ok(ConversionOutcome {
                source_id: result.source_id,
                account_id: result.account_id,
                contact_id: result.contact_id,
                opportunity_id: result.opportunity_id,
            })
        })
        .collect()
}

fn log_engine_failure(batch_id: Uuid, error: &EngineError) {
    if error.is_rejection() {
        for failure in error.failures() {
            tracing::warn!(
                batch_id = %batch_id,
                index = failure.index,
                source_id = ?failure.source_id.as_ref().map(|id| id.as_str()),
                reason = %failure.message,
                "Engine rejected request"
            );
        }
        tracing::error!(
            batch_id = %batch_id,
            rejected = error.failures().len(),
            "Batch rejected by conversion engine, nothing committed"
        );
    } else {
        crate::log_error_with_context!(error, "Conversion engine call failed");
    }
}
