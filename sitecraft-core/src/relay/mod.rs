//! Client for an intermediary relay in front of the generation service.
//!
//! The relay receives `{prompt, theme, geminiKey}` and is expected to answer
//! with a JSON object carrying the page under one of the shapes understood by
//! [`crate::markup::extract`].

use crate::config::constants::markup::RELAY_ERROR_SNIPPET_CHARS;
use crate::config::constants::urls::{RELAY_PRODUCTION_PATH_SEGMENT, RELAY_TEST_PATH_SEGMENT};
use crate::gemini::ClientConfig;
use crate::generation::error::{GenerationError, snippet};
use crate::markup::{has_doctype, has_root_tag};
use crate::template::ThemeId;
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{debug, warn};

/// Reply sent by relays that acknowledge before the workflow has finished
pub const WORKFLOW_STARTED: &str = "workflow was started";

#[derive(Debug, Clone, Serialize)]
pub struct RelayRequest<'a> {
    pub prompt: &'a str,
    pub theme: &'a str,
    #[serde(rename = "geminiKey")]
    pub gemini_key: &'a str,
}

/// Raw relay reply, before status mapping and decoding
#[derive(Debug, Clone)]
pub struct RelayResponse {
    pub status: u16,
    pub body: String,
}

impl RelayResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Clone)]
pub struct RelayClient {
    url: String,
    api_key: String,
    http: reqwest::Client,
}

impl std::fmt::Debug for RelayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayClient")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

impl RelayClient {
    pub fn new(
        url: impl Into<String>,
        api_key: impl Into<String>,
        config: &ClientConfig,
    ) -> Result<Self, GenerationError> {
        let http = config.build_http().map_err(|err| {
            GenerationError::Transport(format!("failed to build HTTP client: {err}"))
        })?;
        Ok(Self {
            url: url.into(),
            api_key: api_key.into(),
            http,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// POST one request and return the reply untouched.
    ///
    /// Only transport failures are errors here; any status is returned.
    pub async fn post(&self, prompt: &str, theme: &str) -> Result<RelayResponse, GenerationError> {
        let request = RelayRequest {
            prompt,
            theme,
            gemini_key: &self.api_key,
        };
        debug!(url = %self.url, theme, "calling relay");

        let response = self
            .http
            .post(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(GenerationError::transport)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(GenerationError::transport)?;
        debug!(status, bytes = body.len(), "relay responded");
        Ok(RelayResponse { status, body })
    }

    /// Full relay round trip: post, check status, decode, inspect
    pub async fn generate(&self, prompt: &str, theme: ThemeId) -> Result<Value, GenerationError> {
        let response = self.post(prompt, theme.as_str()).await?;
        let payload = into_payload(&response)?;
        inspect_payload(&payload)?;
        Ok(payload)
    }
}

/// Map a reply to its payload, or to the failure its status stands for
pub fn into_payload(response: &RelayResponse) -> Result<Value, GenerationError> {
    if !response.is_success() {
        let err = map_status(response.status, &response.body);
        warn!(%err, "relay returned an error status");
        return Err(err);
    }
    decode_body(&response.body)
}

fn map_status(status: u16, body: &str) -> GenerationError {
    let detail = snippet(body, RELAY_ERROR_SNIPPET_CHARS);
    match status {
        401 | 403 => GenerationError::Auth { status },
        404 => GenerationError::Transport(
            "relay endpoint not found (is the workflow active?)".to_string(),
        ),
        429 => GenerationError::RateLimited,
        500 => GenerationError::RelayWorkflow(format!("HTTP 500: {detail}")),
        503 => GenerationError::ServiceUnavailable,
        _ => GenerationError::Transport(format!("HTTP {status}: {detail}")),
    }
}

/// Decode a successful reply body.
///
/// Relays sometimes answer with the bare document instead of JSON; such a
/// body is wrapped as `{"html": body}`.
pub fn decode_body(body: &str) -> Result<Value, GenerationError> {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => Ok(value),
        Err(err) if has_doctype(body) || has_root_tag(body) => {
            debug!(%err, "relay returned a bare document");
            Ok(json!({ "html": body }))
        }
        Err(err) => Err(GenerationError::InvalidResponse(format!(
            "relay reply is neither JSON nor a document: {err}"
        ))),
    }
}

/// Reject replies that are acknowledgements or workflow failures
pub fn inspect_payload(payload: &Value) -> Result<(), GenerationError> {
    let acknowledged = payload
        .get("message")
        .and_then(Value::as_str)
        .is_some_and(|message| message.trim().eq_ignore_ascii_case(WORKFLOW_STARTED));
    if acknowledged {
        return Err(GenerationError::RelayMisconfigured);
    }

    if let Some(error) = payload.get("error").filter(|e| is_truthy(e)) {
        let detail = match error {
            Value::String(text) => text.clone(),
            other => other
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| other.to_string()),
        };
        return Err(GenerationError::RelayWorkflow(detail));
    }
    Ok(())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::String(text) => !text.is_empty(),
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// True for relay URLs that only work while an editor session listens
pub fn is_test_endpoint(url: &str) -> bool {
    url.contains(RELAY_TEST_PATH_SEGMENT)
}

pub fn is_production_endpoint(url: &str) -> bool {
    url.contains(RELAY_PRODUCTION_PATH_SEGMENT)
}

/// The production form of a test endpoint URL
pub fn production_url(url: &str) -> String {
    url.replace(RELAY_TEST_PATH_SEGMENT, RELAY_PRODUCTION_PATH_SEGMENT)
}
