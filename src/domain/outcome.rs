//! Conversion outcome domain model

use super::ids::{RecordId, SourceId};
use serde::{Deserialize, Serialize};

/// Caller-facing result of converting one source record
///
/// The destination identifiers are whatever the engine assigned or linked;
/// any of them may be absent (for example when opportunity creation was
/// suppressed). They serialize as explicit `null`s so callers always see the
/// full shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionOutcome {
    /// Source record that was converted
    pub source_id: SourceId,

    /// Destination account
    pub account_id: Option<RecordId>,

    /// Destination contact
    pub contact_id: Option<RecordId>,

    /// Destination opportunity
    pub opportunity_id: Option<RecordId>,
}

impl ConversionOutcome {
    /// Creates an outcome with no destination identifiers
    pub fn new(source_id: SourceId) -> Self {
        Self {
            source_id,
            account_id: None,
            contact_id: None,
            opportunity_id: None,
        }
    }

    /// Sets the account ID
    pub fn with_account_id(mut self, account_id: RecordId) -> Self {
        self.account_id = Some(account_id);
        self
    }

    /// Sets the contact ID
    pub fn with_contact_id(mut self, contact_id: RecordId) -> Self {
        self.contact_id = Some(contact_id);
        self
    }

    /// Sets the opportunity ID
    pub fn with_opportunity_id(mut self, opportunity_id: RecordId) -> Self {
        self.opportunity_id = Some(opportunity_id);
        self
    }
}
