//! Integration tests for the batch conversion flow
//!
//! A recording engine stands in for the external conversion engine so the
//! tests can see exactly what was submitted, and how often.

use async_trait::async_trait;
use leadflow::adapters::engine::{
    ConversionEngine, EngineRequest, EngineResult, HttpConversionEngine,
};
use leadflow::config::{BatchConfig, EngineConfig};
use leadflow::core::convert::BatchConverter;
use leadflow::domain::{
    ConversionRequest, ElementFailure, EngineError, LeadflowError, RecordId, SourceId,
};
use std::sync::{Arc, Mutex};

/// Engine that records batches and rejects any source id it is told to
#[derive(Default)]
struct RecordingEngine {
    batches: Mutex<Vec<Vec<EngineRequest>>>,
    reject: Vec<(String, String)>,
}

impl RecordingEngine {
    fn rejecting(source_id: &str, reason: &str) -> Self {
        Self {
            batches: Mutex::new(Vec::new()),
            reject: vec![(source_id.to_string(), reason.to_string())],
        }
    }

    fn batches(&self) -> Vec<Vec<EngineRequest>> {
        self.batches.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConversionEngine for RecordingEngine {
    async fn convert(
        &self,
        requests: &[EngineRequest],
    ) -> Result<Vec<EngineResult>, EngineError> {
        self.batches.lock().unwrap().push(requests.to_vec());

        let failures: Vec<ElementFailure> = requests
            .iter()
            .enumerate()
            .filter_map(|(index, request)| {
                self.reject
                    .iter()
                    .find(|(id, _)| id == request.source_id.as_str())
                    .map(|(_, reason)| {
                        ElementFailure::new(index, reason.clone())
                            .with_source_id(request.source_id.clone())
                    })
            })
            .collect();

        if !failures.is_empty() {
            return Err(EngineError::Rejected { failures });
        }

        Ok(requests
            .iter()
            .map(|request| {
                let id = request.source_id.as_str();
                EngineResult {
                    source_id: request.source_id.clone(),
                    account_id: Some(
                        request
                            .account_id
                            .clone()
                            .unwrap_or_else(|| record(&format!("001{id}"))),
                    ),
                    contact_id: Some(
                        request
                            .contact_id
                            .clone()
                            .unwrap_or_else(|| record(&format!("003{id}"))),
                    ),
                    opportunity_id: if request.suppresses_opportunity() {
                        None
                    } else {
                        Some(
                            request
                                .opportunity_id
                                .clone()
                                .unwrap_or_else(|| record(&format!("006{id}"))),
                        )
                    },
                }
            })
            .collect())
    }

    fn describe(&self) -> String {
        "recording engine".to_string()
    }
}

fn record(id: &str) -> RecordId {
    RecordId::new(id).unwrap()
}

fn requests_from_json(json: &str) -> Vec<ConversionRequest> {
    serde_json::from_str(json).unwrap()
}

fn converter(engine: Arc<RecordingEngine>) -> BatchConverter {
    BatchConverter::new(engine, &BatchConfig::default())
}

#[tokio::test]
async fn test_suppressed_and_named_opportunities() {
    let requests = requests_from_json(
        r#"[
            {"sourceId": "L1", "convertedStatus": "Qualified", "createOpportunity": false},
            {"sourceId": "L2", "convertedStatus": "Qualified", "opportunityName": "Big Deal"}
        ]"#,
    );

    let engine = Arc::new(RecordingEngine::default());
    let outcomes = converter(engine.clone())
        .convert_batch(&requests)
        .await
        .unwrap();

    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0].source_id.as_str(), "L1");
    assert!(outcomes[0].account_id.is_some());
    assert!(outcomes[0].contact_id.is_some());
    assert!(outcomes[0].opportunity_id.is_none());
    assert_eq!(outcomes[1].opportunity_id, Some(record("006L2")));

    let batches = engine.batches();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0][0].do_not_create_opportunity, Some(true));
    assert_eq!(batches[0][1].opportunity_name.as_deref(), Some("Big Deal"));
    assert!(batches[0][1].do_not_create_opportunity.is_none());
}

#[tokio::test]
async fn test_existing_targets_are_linked() {
    let requests = requests_from_json(
        r#"[{
            "sourceId": "L7",
            "convertedStatus": "Qualified",
            "accountTarget": "001EXIST",
            "contactTarget": "003EXIST",
            "opportunityTarget": "006EXIST",
            "ownerId": "005OWNER",
            "overwriteSource": true
        }]"#,
    );

    let engine = Arc::new(RecordingEngine::default());
    let report = converter(engine.clone()).run(&requests).await.unwrap();

    let outcome = &report.outcomes[0];
    assert_eq!(outcome.account_id, Some(record("001EXIST")));
    assert_eq!(outcome.contact_id, Some(record("003EXIST")));
    assert_eq!(outcome.opportunity_id, Some(record("006EXIST")));
    assert_eq!(report.summary.accounts_linked, 1);
    assert_eq!(report.summary.contacts_linked, 1);
    assert_eq!(report.summary.opportunities_created, 0);

    let submitted = &engine.batches()[0][0];
    assert_eq!(submitted.owner_id, Some(record("005OWNER")));
    assert_eq!(submitted.overwrite_lead_source, Some(true));
}

#[tokio::test]
async fn test_one_rejection_fails_the_whole_batch() {
    let requests = requests_from_json(
        r#"[
            {"sourceId": "L1", "convertedStatus": "Qualified"},
            {"sourceId": "L2", "convertedStatus": "Qualified"},
            {"sourceId": "L3", "convertedStatus": "Qualified"}
        ]"#,
    );

    let engine = Arc::new(RecordingEngine::rejecting("L2", "lead is already converted"));
    let err = converter(engine.clone())
        .convert_batch(&requests)
        .await
        .unwrap_err();

    assert!(err.is_engine_rejection());
    match err {
        LeadflowError::Engine(EngineError::Rejected { failures }) => {
            assert_eq!(failures.len(), 1);
            assert_eq!(failures[0].index, 1);
            assert_eq!(failures[0].source_id, Some(SourceId::new("L2").unwrap()));
            assert_eq!(failures[0].message, "lead is already converted");
        }
        other => panic!("expected rejection, got {other:?}"),
    }

    // Submitted once, whole batch, nothing retried
    assert_eq!(engine.batches().len(), 1);
    assert_eq!(engine.batches()[0].len(), 3);
}

#[tokio::test]
async fn test_blank_status_stops_batch_before_engine() {
    let requests = requests_from_json(
        r#"[
            {"sourceId": "L1", "convertedStatus": "Qualified"},
            {"sourceId": "L2", "convertedStatus": "   "}
        ]"#,
    );

    let engine = Arc::new(RecordingEngine::default());
    let err = converter(engine.clone())
        .convert_batch(&requests)
        .await
        .unwrap_err();

    assert!(matches!(err, LeadflowError::InvalidRequest { index: 1, .. }));
    assert!(engine.batches().is_empty());
}

#[test]
fn test_missing_mandatory_fields_fail_to_deserialize() {
    for json in [
        r#"[{"convertedStatus": "Qualified"}]"#,
        r#"[{"sourceId": "L1"}]"#,
        r#"[{"sourceId": "", "convertedStatus": "Qualified"}]"#,
    ] {
        assert!(
            serde_json::from_str::<Vec<ConversionRequest>>(json).is_err(),
            "expected failure for {json}"
        );
    }
}

#[tokio::test]
async fn test_batch_limit_from_config() {
    let requests = requests_from_json(
        r#"[
            {"sourceId": "L1", "convertedStatus": "Qualified"},
            {"sourceId": "L2", "convertedStatus": "Qualified"}
        ]"#,
    );

    let engine = Arc::new(RecordingEngine::default());
    let converter = BatchConverter::new(engine.clone(), &BatchConfig { max_batch_size: 1 });

    let err = converter.convert_batch(&requests).await.unwrap_err();
    assert!(err.is_validation());
    assert!(engine.batches().is_empty());
}

#[tokio::test]
async fn test_concurrent_batches_are_independent() {
    let engine = Arc::new(RecordingEngine::rejecting("BAD", "invalid status"));
    let converter = Arc::new(converter(engine.clone()));

    let good = requests_from_json(
        r#"[{"sourceId": "A1", "convertedStatus": "Qualified"},
            {"sourceId": "A2", "convertedStatus": "Qualified"}]"#,
    );
    let bad = requests_from_json(
        r#"[{"sourceId": "B1", "convertedStatus": "Qualified"},
            {"sourceId": "BAD", "convertedStatus": "Qualified"}]"#,
    );

    let (good_result, bad_result) =
        tokio::join!(converter.convert_batch(&good), converter.convert_batch(&bad));

    let outcomes = good_result.unwrap();
    assert_eq!(outcomes[0].source_id.as_str(), "A1");
    assert_eq!(outcomes[1].source_id.as_str(), "A2");
    assert!(bad_result.unwrap_err().is_engine_rejection());
    assert_eq!(engine.batches().len(), 2);
}

#[tokio::test]
async fn test_outcomes_serialize_with_explicit_nulls() {
    let requests = requests_from_json(
        r#"[{"sourceId": "L1", "convertedStatus": "Qualified", "createOpportunity": false}]"#,
    );

    let outcomes = converter(Arc::new(RecordingEngine::default()))
        .convert_batch(&requests)
        .await
        .unwrap();

    let json = serde_json::to_value(&outcomes).unwrap();
    assert_eq!(json[0]["sourceId"], "L1");
    assert_eq!(json[0]["accountId"], "001L1");
    assert!(json[0]["opportunityId"].is_null());
}

#[tokio::test]
async fn test_http_engine_end_to_end() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/lead-conversions")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "allOrNone": true,
            "requests": [{"sourceId": "L1", "convertedStatus": "Qualified", "doNotCreateOpportunity": true}]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"results": [{"sourceId": "L1", "accountId": "001A", "contactId": "003C", "opportunityId": null}]}"#,
        )
        .create_async()
        .await;

    let mut engine_config = EngineConfig::new(server.url());
    engine_config.timeout_seconds = 5;
    let engine = Arc::new(HttpConversionEngine::new(engine_config).unwrap());
    let converter = BatchConverter::new(engine, &BatchConfig::default());

    let requests = requests_from_json(
        r#"[{"sourceId": "L1", "convertedStatus": "Qualified", "createOpportunity": false}]"#,
    );
    let outcomes = converter.convert_batch(&requests).await.unwrap();

    mock.assert_async().await;
    assert_eq!(outcomes[0].account_id, Some(record("001A")));
    assert!(outcomes[0].opportunity_id.is_none());
}
