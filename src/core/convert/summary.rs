//! Batch conversion summary and reporting

use crate::domain::{ConversionOutcome, ConversionRequest};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;
use uuid::Uuid;

/// Summary of one successful batch call
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    /// Correlation ID used in logs for this batch
    pub batch_id: Uuid,

    /// When the batch call started
    pub started_at: DateTime<Utc>,

    /// Number of requests (and outcomes)
    pub total: usize,

    /// Requests converted into an existing account
    pub accounts_linked: usize,

    /// Requests converted into an existing contact
    pub contacts_linked: usize,

    /// Outcomes carrying an opportunity the request did not name
    pub opportunities_created: usize,

    /// Outcomes without any opportunity
    pub opportunities_suppressed: usize,

    /// Wall-clock time of the whole call
    #[serde(serialize_with = "serialize_duration_ms")]
    pub duration: Duration,
}

impl BatchSummary {
    /// Builds a summary from order-correlated requests and outcomes
    pub fn from_batch(
        batch_id: Uuid,
        started_at: DateTime<Utc>,
        requests: &[ConversionRequest],
        outcomes: &[ConversionOutcome],
    ) -> Self {
        let mut summary = Self {
            batch_id,
            started_at,
            total: outcomes.len(),
            accounts_linked: 0,
            contacts_linked: 0,
            opportunities_created: 0,
            opportunities_suppressed: 0,
            duration: Duration::from_secs(0),
        };

        for (request, outcome) in requests.iter().zip(outcomes) {
            if request.account_target.is_some() {
                summary.accounts_linked += 1;
            }
            if request.contact_target.is_some() {
                summary.contacts_linked += 1;
            }
            match (&request.opportunity_target, &outcome.opportunity_id) {
                (None, Some(_)) => summary.opportunities_created += 1,
                (_, None) => summary.opportunities_suppressed += 1,
                _ => {}
            }
        }

        summary
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

fn serialize_duration_ms<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
}
