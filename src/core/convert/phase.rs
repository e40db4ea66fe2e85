//! Batch call lifecycle
//!
//! A batch call moves `Validating -> Submitted -> Succeeded`, or ends in
//! `Failed` from either non-terminal phase. Nothing is persisted and there is
//! no way back out of a terminal phase.

use serde::Serialize;
use std::fmt;

/// Phase of a single batch call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchPhase {
    /// Checking limits and mapping requests
    Validating,
    /// Waiting on the engine
    Submitted,
    /// Outcomes returned to the caller
    Succeeded,
    /// Batch-level failure returned to the caller
    Failed,
}

impl BatchPhase {
    /// Whether the batch call has finished
    pub fn is_terminal(self) -> bool {
        matches!(self, BatchPhase::Succeeded | BatchPhase::Failed)
    }

    /// Whether moving from `self` to `next` is allowed
    pub fn can_transition_to(self, next: BatchPhase) -> bool {
        matches!(
            (self, next),
            (BatchPhase::Validating, BatchPhase::Submitted)
                | (BatchPhase::Validating, BatchPhase::Failed)
                | (BatchPhase::Submitted, BatchPhase::Succeeded)
                | (BatchPhase::Submitted, BatchPhase::Failed)
        )
    }
}

impl fmt::Display for BatchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BatchPhase::Validating => "validating",
            BatchPhase::Submitted => "submitted",
            BatchPhase::Succeeded => "succeeded",
            BatchPhase::Failed => "failed",
        };
        write!(f, "{name}")
    }
}

/// Tracks the phase of one batch call and logs each transition
#[derive(Debug)]
pub(crate) struct PhaseTracker {
    batch_id: uuid::Uuid,
    phase: BatchPhase,
}

impl PhaseTracker {
    pub(crate) fn new(batch_id: uuid::Uuid) -> Self {
        Self {
            batch_id,
            phase: BatchPhase::Validating,
        }
    }

    pub(crate) fn phase(&self) -> BatchPhase {
        self.phase
    }

    pub(crate) fn advance(&mut self, next: BatchPhase) {
        debug_assert!(
            self.phase.can_transition_to(next),
            "invalid batch transition {} -> {}",
            self.phase,
            next
        );
        tracing::debug!(
            batch_id = %self.batch_id,
            from = %self.phase,
            to = %next,
            "Batch phase transition"
        );
        self.phase = next;
    }
}
