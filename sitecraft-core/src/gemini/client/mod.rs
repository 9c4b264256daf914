pub mod config;

pub use config::ClientConfig;

use crate::config::constants::markup::SERVICE_ERROR_SNIPPET_CHARS;
use crate::gemini::models::GenerateContentRequest;
use crate::generation::error::{GenerationError, snippet};
use reqwest::Client as ReqwestClient;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, warn};

/// Direct client for the `generateContent` endpoint
#[derive(Clone)]
pub struct Client {
    api_key: String,
    model: String,
    base_url: String,
    http: ReqwestClient,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Client {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, GenerationError> {
        Self::with_config(api_key, model, base_url, &ClientConfig::default())
    }

    /// Create a client with custom HTTP configuration
    pub fn with_config(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        config: &ClientConfig,
    ) -> Result<Self, GenerationError> {
        let http = config.build_http().map_err(|err| {
            GenerationError::Transport(format!("failed to build HTTP client: {err}"))
        })?;
        Ok(Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Send one request and return the raw response payload.
    ///
    /// The key travels as a query parameter and is never logged.
    pub async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<Value, GenerationError> {
        let start = Instant::now();
        let endpoint = self.endpoint();
        debug!(url = %format!("{endpoint}?key=***"), "calling generation service");

        let response = self
            .http
            .post(&endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .send()
            .await
            .map_err(GenerationError::transport)?;

        let status = response.status();
        let body = response.text().await.map_err(GenerationError::transport)?;
        debug!(
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "generation service responded"
        );

        if !status.is_success() {
            let err = map_status(status, &body);
            warn!(%err, "generation service returned an error status");
            return Err(err);
        }

        let payload: Value = serde_json::from_str(&body).map_err(|err| {
            GenerationError::InvalidResponse(format!("response is not JSON: {err}"))
        })?;

        if let Some(error) = payload.get("error").filter(|e| e.is_object()) {
            let message = error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown error");
            return Err(GenerationError::Provider(message.to_string()));
        }

        Ok(payload)
    }
}

fn map_status(status: StatusCode, body: &str) -> GenerationError {
    match status.as_u16() {
        400 => GenerationError::Provider(format!(
            "invalid request: {}",
            snippet(body, SERVICE_ERROR_SNIPPET_CHARS)
        )),
        code @ (401 | 403) => GenerationError::Auth { status: code },
        429 => GenerationError::RateLimited,
        code => GenerationError::Transport(format!(
            "HTTP {code}: {}",
            snippet(body, SERVICE_ERROR_SNIPPET_CHARS)
        )),
    }
}
