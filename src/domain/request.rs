//! Conversion request domain model
//!
//! This module defines the caller-facing [`ConversionRequest`] shape.

use super::ids::{RecordId, SourceId};
use serde::{Deserialize, Serialize};

/// One caller-supplied request to convert a source record
///
/// `source_id` and `converted_status` are mandatory; every other field is
/// optional and left unset means "use the engine default". Deserializes from
/// the camelCase JSON shape automation callers send.
///
/// # Examples
///
/// ```
/// use leadflow::domain::request::ConversionRequest;
///
/// let request: ConversionRequest = serde_json::from_str(
///     r#"{"sourceId": "L1", "convertedStatus": "Qualified", "createOpportunity": false}"#,
/// ).unwrap();
/// assert_eq!(request.source_id.as_str(), "L1");
/// assert_eq!(request.create_opportunity, Some(false));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRequest {
    /// Source record to convert
    pub source_id: SourceId,

    /// Status marker the source record receives once converted
    pub converted_status: String,

    /// Existing account to convert into (absent: create one)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_target: Option<RecordId>,

    /// Existing contact to convert into (absent: create one)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_target: Option<RecordId>,

    /// Existing opportunity to convert into (absent: create one)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opportunity_target: Option<RecordId>,

    /// Copy the source provenance field onto the destination contact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overwrite_source: Option<bool>,

    /// Produce a destination opportunity (default true)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_opportunity: Option<bool>,

    /// Name for a newly created opportunity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opportunity_name: Option<String>,

    /// Owner of the destination records (absent: the source record's owner)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<RecordId>,

    /// Notify the owner once converted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_owner: Option<bool>,
}

impl ConversionRequest {
    /// Creates a request with only the mandatory fields set
    pub fn new(source_id: SourceId, converted_status: impl Into<String>) -> Self {
        Self {
            source_id,
            converted_status: converted_status.into(),
            account_target: None,
            contact_target: None,
            opportunity_target: None,
            overwrite_source: None,
            create_opportunity: None,
            opportunity_name: None,
            owner_id: None,
            notify_owner: None,
        }
    }

    /// Creates a new builder for constructing a ConversionRequest
    pub fn builder() -> ConversionRequestBuilder {
        ConversionRequestBuilder::default()
    }

    /// Effective value of `create_opportunity`, applying its default of true
    pub fn creates_opportunity(&self) -> bool {
        self.create_opportunity.unwrap_or(true)
    }
}

/// Builder for constructing ConversionRequest instances
#[derive(Debug, Default)]
pub struct ConversionRequestBuilder {
    source_id: Option<SourceId>,
    converted_status: Option<String>,
    account_target: Option<RecordId>,
    contact_target: Option<RecordId>,
    opportunity_target: Option<RecordId>,
    overwrite_source: Option<bool>,
    create_opportunity: Option<bool>,
    opportunity_name: Option<String>,
    owner_id: Option<RecordId>,
    notify_owner: Option<bool>,
}

impl ConversionRequestBuilder {
    /// Creates a new ConversionRequestBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source ID
    pub fn source_id(mut self, source_id: SourceId) -> Self {
        self.source_id = Some(source_id);
        self
    }

    /// Sets the converted status
    pub fn converted_status(mut self, status: impl Into<String>) -> Self {
        self.converted_status = Some(status.into());
        self
    }

    /// Sets the target account
    pub fn account_target(mut self, account: RecordId) -> Self {
        self.account_target = Some(account);
        self
    }

    /// Sets the target contact
    pub fn contact_target(mut self, contact: RecordId) -> Self {
        self.contact_target = Some(contact);
        self
    }

    /// Sets the target opportunity
    pub fn opportunity_target(mut self, opportunity: RecordId) -> Self {
        self.opportunity_target = Some(opportunity);
        self
    }

    /// Sets the overwrite-source flag
    pub fn overwrite_source(mut self, overwrite: bool) -> Self {
        self.overwrite_source = Some(overwrite);
        self
    }

    /// Sets the create-opportunity flag
    pub fn create_opportunity(mut self, create: bool) -> Self {
        self.create_opportunity = Some(create);
        self
    }

    /// Sets the opportunity name
    pub fn opportunity_name(mut self, name: impl Into<String>) -> Self {
        self.opportunity_name = Some(name.into());
        self
    }

    /// Sets the owner override
    pub fn owner_id(mut self, owner: RecordId) -> Self {
        self.owner_id = Some(owner);
        self
    }

    /// Sets the notify-owner flag
    pub fn notify_owner(mut self, notify: bool) -> Self {
        self.notify_owner = Some(notify);
        self
    }

    /// Builds the ConversionRequest
    ///
    /// # Errors
    ///
    /// Returns an error if `source_id` or `converted_status` is missing
    pub fn build(self) -> Result<ConversionRequest, String> {
        let converted_status = self
            .converted_status
            .filter(|s| !s.trim().is_empty())
            .ok_or("converted_status is required")?;

        Ok(ConversionRequest {
            source_id: self.source_id.ok_or("source_id is required")?,
            converted_status,
            account_target: self.account_target,
            contact_target: self.contact_target,
            opportunity_target: self.opportunity_target,
            overwrite_source: self.overwrite_source,
            create_opportunity: self.create_opportunity,
            opportunity_name: self.opportunity_name,
            owner_id: self.owner_id,
            notify_owner: self.notify_owner,
        })
    }
}
