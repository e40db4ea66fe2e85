//! Conversion engine trait definition
//!
//! This module defines the `ConversionEngine` trait and the engine-native
//! request/result shapes. The engine is an external collaborator: leadflow
//! only shapes its inputs and interprets its outputs.

use crate::domain::ids::{RecordId, SourceId};
use crate::domain::EngineError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Engine-native conversion request
///
/// Optional fields left as `None` are omitted from the wire payload so the
/// engine applies its own defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineRequest {
    /// Record to convert
    pub source_id: SourceId,

    /// Status set on the converted record
    pub converted_status: String,

    /// Account to merge into
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<RecordId>,

    /// Contact to merge into
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<RecordId>,

    /// Opportunity to merge into
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opportunity_id: Option<RecordId>,

    /// Overwrite the contact's lead source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overwrite_lead_source: Option<bool>,

    /// Skip opportunity creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub do_not_create_opportunity: Option<bool>,

    /// Name of the created opportunity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opportunity_name: Option<String>,

    /// Owner of the destination records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<RecordId>,

    /// Send the owner a notification email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_notification_email: Option<bool>,
}

impl EngineRequest {
    /// Creates a request carrying only the mandatory fields
    pub fn new(source_id: SourceId, converted_status: impl Into<String>) -> Self {
        Self {
            source_id,
            converted_status: converted_status.into(),
            account_id: None,
            contact_id: None,
            opportunity_id: None,
            overwrite_lead_source: None,
            do_not_create_opportunity: None,
            opportunity_name: None,
            owner_id: None,
            send_notification_email: None,
        }
    }

    /// Whether the engine will skip opportunity creation for this request
    ///
    /// An unset flag means the engine default, which is to create one.
    pub fn suppresses_opportunity(&self) -> bool {
        self.do_not_create_opportunity.unwrap_or(false)
    }
}

/// Engine-native conversion result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineResult {
    /// Record that was converted
    pub source_id: SourceId,

    /// Account created or linked
    #[serde(default, deserialize_with = "blank_as_none")]
    pub account_id: Option<RecordId>,

    /// Contact created or linked
    #[serde(default, deserialize_with = "blank_as_none")]
    pub contact_id: Option<RecordId>,

    /// Opportunity created or linked
    #[serde(default, deserialize_with = "blank_as_none")]
    pub opportunity_id: Option<RecordId>,
}

// Engines report "no record" as null, a missing key or an empty string.
fn blank_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<RecordId>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(id) if !id.trim().is_empty() => RecordId::new(id)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// Trait for lead conversion engines
///
/// Implementations must treat the batch as a unit: either every request is
/// converted and one result per request is returned in request order, or
/// nothing is committed and an [`EngineError`] is returned.
///
/// # Example
///
/// ```no_run
/// use leadflow::adapters::engine::{ConversionEngine, EngineRequest};
/// use leadflow::domain::SourceId;
///
/// # async fn example(engine: &impl ConversionEngine) -> Result<(), Box<dyn std::error::Error>> {
/// let requests = vec![EngineRequest::new(SourceId::new("L1")?, "Qualified")];
/// let results = engine.convert(&requests).await?;
/// assert_eq!(results.len(), requests.len());
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait ConversionEngine: Send + Sync {
    /// Convert every request in the batch, all-or-none
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Rejected`] with one entry per refused element,
    /// or a system error variant for transport or engine faults.
    async fn convert(
        &self,
        requests: &[EngineRequest],
    ) -> std::result::Result<Vec<EngineResult>, EngineError>;

    /// Short description of the engine endpoint, for logs
    fn describe(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_request_omits_unset_fields() {
        let request = EngineRequest::new(SourceId::new("L1").unwrap(), "Qualified");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"sourceId": "L1", "convertedStatus": "Qualified"})
        );
        assert!(!request.suppresses_opportunity());
    }

    #[test]
    fn test_engine_request_explicit_suppress() {
        let mut request = EngineRequest::new(SourceId::new("L1").unwrap(), "Qualified");
        request.do_not_create_opportunity = Some(true);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["doNotCreateOpportunity"], serde_json::json!(true));
        assert!(request.suppresses_opportunity());
    }

    #[test]
    fn test_engine_result_missing_ids_default_to_none() {
        let result: EngineResult =
            serde_json::from_str(r#"{"sourceId": "L1", "accountId": "001A"}"#).unwrap();

        assert_eq!(result.account_id.unwrap().as_str(), "001A");
        assert!(result.contact_id.is_none());
        assert!(result.opportunity_id.is_none());
    }

    #[test]
    fn test_engine_result_blank_ids_are_none() {
        let result: EngineResult = serde_json::from_str(
            r#"{"sourceId": "L1", "accountId": "001A", "contactId": null, "opportunityId": ""}"#,
        )
        .unwrap();

        assert_eq!(result.account_id.unwrap().as_str(), "001A");
        assert!(result.contact_id.is_none());
        assert!(result.opportunity_id.is_none());
    }

    #[test]
    fn test_engine_result_blank_source_id_rejected() {
        let result = serde_json::from_str::<EngineResult>(r#"{"sourceId": " "}"#);
        assert!(result.is_err());
    }
}
