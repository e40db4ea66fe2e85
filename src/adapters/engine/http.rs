//! HTTP conversion engine client
//!
//! Submits a whole batch to the engine's REST endpoint in one POST:
//!
//! ```text
//! POST {base_url}{convert_path}
//! {"allOrNone": true, "requests": [ ...EngineRequest... ]}
//! ```
//!
//! A 2xx answer carries `{"results": [...]}` in request order. A 409 or 422
//! answer carries a non-empty `{"errors": [{"index", "sourceId", "message"}]}`
//! and means nothing was committed. Anything else, including a 409 or 422
//! with some other body, is a system fault. Requests are never retried here.

use super::{ConversionEngine, EngineRequest, EngineResult};
use crate::config::EngineConfig;
use crate::domain::ids::SourceId;
use crate::domain::{ElementFailure, EngineError, LeadflowError, Result};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConvertPayload<'a> {
    all_or_none: bool,
    requests: &'a [EngineRequest],
}

#[derive(Deserialize)]
struct ConvertResponse {
    results: Vec<EngineResult>,
}

#[derive(Deserialize)]
struct RejectionResponse {
    errors: Vec<WireFailure>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireFailure {
    index: usize,
    #[serde(default)]
    source_id: Option<String>,
    message: String,
}

impl From<WireFailure> for ElementFailure {
    fn from(wire: WireFailure) -> Self {
        let failure = ElementFailure::new(wire.index, wire.message);
        match wire.source_id.and_then(|id| SourceId::new(id).ok()) {
            Some(id) => failure.with_source_id(id),
            None => failure,
        }
    }
}

/// Conversion engine reached over HTTP
///
/// # Example
///
/// ```no_run
/// use leadflow::adapters::engine::HttpConversionEngine;
/// use leadflow::config::EngineConfig;
///
/// # fn example() -> leadflow::domain::Result<()> {
/// let engine = HttpConversionEngine::new(EngineConfig::new("https://crm.example.com/api"))?;
/// # Ok(())
/// # }
/// ```
pub struct HttpConversionEngine {
    client: Client,
    url: String,
    config: EngineConfig,
}

impl HttpConversionEngine {
    /// Create a new HTTP engine client
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let mut client_builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30));

        if !config.tls_verify {
            tracing::warn!(
                base_url = %config.base_url,
                "TLS certificate verification disabled for conversion engine"
            );
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        let client = client_builder.build().map_err(|e| {
            LeadflowError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            client,
            url: config.convert_url(),
            config,
        })
    }

    /// Build authorization header value
    fn auth_header_value(&self) -> Option<String> {
        use secrecy::ExposeSecret;

        self.config
            .api_token
            .as_ref()
            .map(|token| format!("Bearer {}", token.expose_secret().as_ref()))
    }

    fn transport_error(&self, err: reqwest::Error) -> EngineError {
        if err.is_timeout() {
            EngineError::Timeout(format!(
                "no answer from {} within {}s",
                self.url, self.config.timeout_seconds
            ))
        } else if err.is_connect() {
            EngineError::Unavailable(format!("{}: {err}", self.url))
        } else {
            EngineError::System(err.to_string())
        }
    }
}

/// Classify a non-2xx answer from its status and body
fn failure_for_status<E: std::fmt::Display>(
    status: StatusCode,
    body: std::result::Result<String, E>,
) -> EngineError {
    let body = match body {
        Ok(body) => body,
        Err(e) => {
            return EngineError::System(format!(
                "engine returned status {status}; reading the body failed: {e}"
            ))
        }
    };

    if status == StatusCode::CONFLICT || status == StatusCode::UNPROCESSABLE_ENTITY {
        if let Some(rejection) = serde_json::from_str::<RejectionResponse>(&body)
            .ok()
            .filter(|rejection| !rejection.errors.is_empty())
        {
            tracing::debug!(
                status = %status,
                failures = rejection.errors.len(),
                "Engine rejected batch"
            );
            return EngineError::Rejected {
                failures: rejection.errors.into_iter().map(Into::into).collect(),
            };
        }
    }

    EngineError::System(format!("engine returned status {status}: {body}"))
}

#[async_trait]
impl ConversionEngine for HttpConversionEngine {
    async fn convert(
        &self,
        requests: &[EngineRequest],
    ) -> std::result::Result<Vec<EngineResult>, EngineError> {
        let payload = ConvertPayload {
            all_or_none: true,
            requests,
        };

        let mut request = self.client.post(&self.url).json(&payload);
        if let Some(auth) = self.auth_header_value() {
            request = request.header("Authorization", auth);
        }

        tracing::debug!(url = %self.url, count = requests.len(), "Posting conversion batch");

        let resp = request.send().await.map_err(|e| self.transport_error(e))?;
        let status = resp.status();

        if status.is_success() {
            let body = resp.json::<ConvertResponse>().await.map_err(|e| {
                tracing::error!(
                    url = %self.url,
                    status = %status,
                    error = %e,
                    "Engine reported success but the response could not be decoded; the batch may have been committed"
                );
                EngineError::InvalidResponse(e.to_string())
            })?;
            return Ok(body.results);
        }

        Err(failure_for_status(status, resp.text().await))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
