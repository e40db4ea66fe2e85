//! Request mapping
//!
//! Turns caller-facing [`ConversionRequest`]s into engine-native
//! [`EngineRequest`]s. Optional fields are forwarded only when they can change
//! what the engine does on its own:
//!
//! | Request field        | Forwarded when      | Engine field                 |
//! |----------------------|---------------------|------------------------------|
//! | `account_target`     | set                 | `account_id`                 |
//! | `contact_target`     | set                 | `contact_id`                 |
//! | `opportunity_target` | set                 | `opportunity_id`             |
//! | `overwrite_source`   | set and true        | `overwrite_lead_source`      |
//! | `create_opportunity` | set (either value)  | `do_not_create_opportunity` (negated) |
//! | `opportunity_name`   | set                 | `opportunity_name`           |
//! | `owner_id`           | set                 | `owner_id`                   |
//! | `notify_owner`       | set and true        | `send_notification_email`    |
//!
//! The engine creates an opportunity unless told otherwise, so
//! `create_opportunity` is the one flag forwarded on `false`.

use crate::adapters::engine::EngineRequest;
use crate::domain::{ConversionRequest, LeadflowError, Result};

/// Map one request to its engine-native form
///
/// Pure: the same request always maps to the same engine request.
///
/// # Errors
///
/// Returns [`LeadflowError::Validation`] if `converted_status` is blank.
///
/// # Example
///
/// ```
/// use leadflow::core::mapper::map_request;
/// use leadflow::domain::{ConversionRequest, SourceId};
///
/// let mut request = ConversionRequest::new(SourceId::new("L1").unwrap(), "Qualified");
/// request.create_opportunity = Some(false);
///
/// let mapped = map_request(&request).unwrap();
/// assert_eq!(mapped.do_not_create_opportunity, Some(true));
/// assert!(mapped.opportunity_name.is_none());
/// ```
pub fn map_request(request: &ConversionRequest) -> Result<EngineRequest> {
    check_mandatory(request).map_err(LeadflowError::Validation)?;
    Ok(to_engine_request(request))
}

/// Map a whole batch, preserving order
///
/// Stops at the first invalid request.
///
/// # Errors
///
/// Returns [`LeadflowError::InvalidRequest`] naming the position of the
/// first request that fails validation.
pub fn map_batch(requests: &[ConversionRequest]) -> Result<Vec<EngineRequest>> {
    requests
        .iter()
        .enumerate()
        .map(|(index, request)| {
            check_mandatory(request)
                .map_err(|message| LeadflowError::InvalidRequest { index, message })?;
            Ok(to_engine_request(request))
        })
        .collect()
}

// SourceId cannot be blank by construction; a blank status counts as missing.
fn check_mandatory(request: &ConversionRequest) -> std::result::Result<(), String> {
    if request.converted_status.trim().is_empty() {
        return Err(format!(
            "convertedStatus is required (source {})",
            request.source_id
        ));
    }
    Ok(())
}

fn to_engine_request(request: &ConversionRequest) -> EngineRequest {
    EngineRequest {
        source_id: request.source_id.clone(),
        converted_status: request.converted_status.clone(),
        account_id: request.account_target.clone(),
        contact_id: request.contact_target.clone(),
        opportunity_id: request.opportunity_target.clone(),
        overwrite_lead_source: request.overwrite_source.filter(|overwrite| *overwrite),
        do_not_create_opportunity: request.create_opportunity.map(|create| !create),
        opportunity_name: request.opportunity_name.clone(),
        owner_id: request.owner_id.clone(),
        send_notification_email: request.notify_owner.filter(|notify| *notify),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RecordId, SourceId};
    use test_case::test_case;

    fn base(id: &str) -> ConversionRequest {
        ConversionRequest::new(SourceId::new(id).unwrap(), "Qualified")
    }

    fn record(id: &str) -> RecordId {
        RecordId::new(id).unwrap()
    }

    #[test]
    fn test_minimal_request_forwards_nothing_optional() {
        let mapped = map_request(&base("L1")).unwrap();

        assert_eq!(mapped, EngineRequest::new(SourceId::new("L1").unwrap(), "Qualified"));
        assert!(!mapped.suppresses_opportunity());
    }

    #[test]
    fn test_targets_forwarded_when_set() {
        let mut request = base("L1");
        request.account_target = Some(record("001A"));
        request.contact_target = Some(record("003C"));
        request.opportunity_target = Some(record("006O"));

        let mapped = map_request(&request).unwrap();
        assert_eq!(mapped.account_id, Some(record("001A")));
        assert_eq!(mapped.contact_id, Some(record("003C")));
        assert_eq!(mapped.opportunity_id, Some(record("006O")));
    }

    #[test]
    fn test_single_target_leaves_others_unset() {
        let mut request = base("L1");
        request.contact_target = Some(record("003C"));

        let mapped = map_request(&request).unwrap();
        assert!(mapped.account_id.is_none());
        assert_eq!(mapped.contact_id, Some(record("003C")));
        assert!(mapped.opportunity_id.is_none());
    }

    #[test_case(None, None ; "unset")]
    #[test_case(Some(false), None ; "false is not forwarded")]
    #[test_case(Some(true), Some(true) ; "true is forwarded")]
    fn test_overwrite_source_forwarding(input: Option<bool>, expected: Option<bool>) {
        let mut request = base("L1");
        request.overwrite_source = input;

        assert_eq!(map_request(&request).unwrap().overwrite_lead_source, expected);
    }

    #[test_case(None, None ; "unset")]
    #[test_case(Some(false), None ; "false is not forwarded")]
    #[test_case(Some(true), Some(true) ; "true is forwarded")]
    fn test_notify_owner_forwarding(input: Option<bool>, expected: Option<bool>) {
        let mut request = base("L1");
        request.notify_owner = input;

        assert_eq!(map_request(&request).unwrap().send_notification_email, expected);
    }

    #[test_case(None, None, false ; "unset keeps engine default")]
    #[test_case(Some(true), Some(false), false ; "true forwarded as do not suppress")]
    #[test_case(Some(false), Some(true), true ; "false forwarded as suppress")]
    fn test_create_opportunity_negated(
        input: Option<bool>,
        expected_flag: Option<bool>,
        suppresses: bool,
    ) {
        let mut request = base("L1");
        request.create_opportunity = input;

        let mapped = map_request(&request).unwrap();
        assert_eq!(mapped.do_not_create_opportunity, expected_flag);
        assert_eq!(mapped.suppresses_opportunity(), suppresses);
        assert_eq!(mapped.suppresses_opportunity(), !request.creates_opportunity());
    }

    #[test]
    fn test_owner_and_name_forwarded() {
        let mut request = base("L1");
        request.owner_id = Some(record("005U"));
        request.opportunity_name = Some("Renewal".to_string());

        let mapped = map_request(&request).unwrap();
        assert_eq!(mapped.owner_id, Some(record("005U")));
        assert_eq!(mapped.opportunity_name.as_deref(), Some("Renewal"));
    }

    #[test]
    fn test_suppressed_opportunity_scenario() {
        let mut request = base("L1");
        request.create_opportunity = Some(false);

        let mapped = map_request(&request).unwrap();
        assert_eq!(mapped.do_not_create_opportunity, Some(true));
        assert!(mapped.opportunity_name.is_none());
        assert!(mapped.opportunity_id.is_none());
    }

    #[test]
    fn test_named_opportunity_scenario() {
        let mut request = base("L2");
        request.opportunity_name = Some("Big Deal".to_string());

        let mapped = map_request(&request).unwrap();
        assert!(!mapped.suppresses_opportunity());
        assert_eq!(mapped.opportunity_name.as_deref(), Some("Big Deal"));
    }

    #[test]
    fn test_mapping_is_idempotent() {
        let mut request = base("L9");
        request.account_target = Some(record("001A"));
        request.create_opportunity = Some(true);
        request.notify_owner = Some(true);

        assert_eq!(map_request(&request).unwrap(), map_request(&request).unwrap());
    }

    #[test]
    fn test_blank_status_rejected() {
        let request = ConversionRequest::new(SourceId::new("L1").unwrap(), " ");
        let err = map_request(&request).unwrap_err();
        assert!(matches!(err, LeadflowError::Validation(_)));
    }

    #[test]
    fn test_map_batch_preserves_order() {
        let requests = vec![base("L1"), base("L2"), base("L3")];
        let mapped = map_batch(&requests).unwrap();

        let ids: Vec<_> = mapped.iter().map(|r| r.source_id.as_str()).collect();
        assert_eq!(ids, vec!["L1", "L2", "L3"]);
    }

    #[test]
    fn test_map_batch_reports_failing_index() {
        let requests = vec![
            base("L1"),
            ConversionRequest::new(SourceId::new("L2").unwrap(), ""),
            base("L3"),
        ];

        match map_batch(&requests) {
            Err(LeadflowError::InvalidRequest { index, message }) => {
                assert_eq!(index, 1);
                assert!(message.contains("convertedStatus"));
            }
            other => panic!("expected InvalidRequest, got {other:?}"),
        }
    }
}
