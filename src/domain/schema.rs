//! Human-readable documentation for the public request and outcome shapes
//!
//! Only interface-description consumers (the `describe` command) read these
//! tables. Conversion logic relies on the struct definitions alone.

use serde::Serialize;

/// Documentation for one field of a public shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDoc {
    /// Wire name (camelCase)
    pub name: &'static str,

    /// Short label
    pub label: &'static str,

    /// Longer description
    pub description: &'static str,

    /// Whether the caller must supply the field
    pub required: bool,
}

impl FieldDoc {
    const fn required(name: &'static str, label: &'static str, description: &'static str) -> Self {
        Self {
            name,
            label,
            description,
            required: true,
        }
    }

    const fn optional(name: &'static str, label: &'static str, description: &'static str) -> Self {
        Self {
            name,
            label,
            description,
            required: false,
        }
    }
}

/// Fields of [`ConversionRequest`](super::ConversionRequest)
pub const REQUEST_FIELDS: &[FieldDoc] = &[
    FieldDoc::required("sourceId", "Source ID", "ID of the record to convert"),
    FieldDoc::required(
        "convertedStatus",
        "Converted Status",
        "Status the source record receives once converted",
    ),
    FieldDoc::optional(
        "accountTarget",
        "Account ID",
        "Existing account to convert into; a new account is created when absent",
    ),
    FieldDoc::optional(
        "contactTarget",
        "Contact ID",
        "Existing contact to convert into; a new contact is created when absent",
    ),
    FieldDoc::optional(
        "opportunityTarget",
        "Opportunity ID",
        "Existing opportunity to convert into; a new opportunity is created when absent",
    ),
    FieldDoc::optional(
        "overwriteSource",
        "Overwrite Lead Source",
        "Copy the source record's lead source onto the contact (default false)",
    ),
    FieldDoc::optional(
        "createOpportunity",
        "Create Opportunity",
        "Create an opportunity during conversion (default true)",
    ),
    FieldDoc::optional(
        "opportunityName",
        "Opportunity Name",
        "Name of the opportunity created when no opportunity ID is given",
    ),
    FieldDoc::optional(
        "ownerId",
        "Owner ID",
        "Owner of the new records; defaults to the source record's owner",
    ),
    FieldDoc::optional(
        "notifyOwner",
        "Send Email to Owner",
        "Send a notification email to the owner (default false)",
    ),
];

/// Fields of [`ConversionOutcome`](super::ConversionOutcome)
pub const OUTCOME_FIELDS: &[FieldDoc] = &[
    FieldDoc::required("sourceId", "Source ID", "ID of the converted record"),
    FieldDoc::optional("accountId", "Account ID", "Account created or linked"),
    FieldDoc::optional("contactId", "Contact ID", "Contact created or linked"),
    FieldDoc::optional(
        "opportunityId",
        "Opportunity ID",
        "Opportunity created or linked; null when creation was suppressed",
    ),
];

/// Looks up a request field by wire name
pub fn request_field(name: &str) -> Option<&'static FieldDoc> {
    REQUEST_FIELDS.iter().find(|f| f.name == name)
}
