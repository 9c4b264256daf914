//! Health checks for the relay endpoint and the service credential

use crate::config::ServiceSettings;
use crate::gemini::{Client, ClientConfig};
use crate::generation::GenerationError;
use crate::markup::{extract, normalize, validate};
use crate::prompts;
use crate::relay::{self, RelayClient};
use crate::template::ThemeId;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Prompt sent to the relay during a diagnostic run
pub const TEST_PROMPT: &str = "Create a simple test page";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CheckStatus::Pass => "PASS",
            CheckStatus::Warn => "WARN",
            CheckStatus::Fail => "FAIL",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Check {
    pub name: &'static str,
    pub status: CheckStatus,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiagnosticReport {
    pub checks: Vec<Check>,
}

impl DiagnosticReport {
    fn push(&mut self, name: &'static str, status: CheckStatus, message: impl Into<String>) {
        self.checks.push(Check {
            name,
            status,
            message: message.into(),
        });
    }

    pub fn has_failures(&self) -> bool {
        self.checks.iter().any(|check| check.status == CheckStatus::Fail)
    }

    pub fn extend(&mut self, other: DiagnosticReport) {
        self.checks.extend(other.checks);
    }

    pub fn status_of(&self, name: &str) -> Option<CheckStatus> {
        self.checks
            .iter()
            .find(|check| check.name == name)
            .map(|check| check.status)
    }
}

fn url_format_check(url: &str, report: &mut DiagnosticReport) {
    if relay::is_test_endpoint(url) {
        report.push(
            "url format",
            CheckStatus::Fail,
            format!(
                "test endpoint only answers while the workflow editor listens; use {}",
                relay::production_url(url)
            ),
        );
    } else if relay::is_production_endpoint(url) {
        report.push("url format", CheckStatus::Pass, "production endpoint");
    } else {
        report.push(
            "url format",
            CheckStatus::Warn,
            "URL does not look like a relay webhook path",
        );
    }
}

/// Run every relay check in order.
///
/// Stops after the first check that leaves nothing to inspect.
pub async fn diagnose_relay(url: &str, api_key: &str, config: &ClientConfig) -> DiagnosticReport {
    let mut report = DiagnosticReport::default();
    url_format_check(url, &mut report);

    let response = match RelayClient::new(url, api_key, config) {
        Ok(client) => client.post(TEST_PROMPT, ThemeId::Portfolio.as_str()).await,
        Err(err) => Err(err),
    };
    let response = match response {
        Ok(response) => response,
        Err(err) => {
            report.push("reachability", CheckStatus::Fail, err.to_string());
            return report;
        }
    };
    let payload = match relay::into_payload(&response) {
        Ok(payload) => {
            report.push(
                "reachability",
                CheckStatus::Pass,
                format!("HTTP {}", response.status),
            );
            report.push("json", CheckStatus::Pass, "response decoded");
            payload
        }
        Err(err @ GenerationError::InvalidResponse(_)) => {
            report.push(
                "reachability",
                CheckStatus::Pass,
                format!("HTTP {}", response.status),
            );
            report.push("json", CheckStatus::Fail, err.to_string());
            return report;
        }
        Err(err) => {
            report.push("reachability", CheckStatus::Fail, err.to_string());
            return report;
        }
    };
    debug!(%payload, "relay diagnostic payload");

    let inspection = relay::inspect_payload(&payload);
    match &inspection {
        Err(GenerationError::RelayMisconfigured) => report.push(
            "response mode",
            CheckStatus::Fail,
            GenerationError::RelayMisconfigured.advisory(),
        ),
        _ => report.push("response mode", CheckStatus::Pass, "relay waits for the workflow"),
    }

    let content = extract(&payload).and_then(|extracted| {
        let normalized = normalize(&extracted.text, ThemeId::Portfolio)?;
        validate(&normalized.markup)?;
        Ok((extracted.shape, normalized.markup.chars().count()))
    });
    match content {
        Ok((shape, chars)) => report.push(
            "content",
            CheckStatus::Pass,
            format!("document in `{shape}` ({chars} characters)"),
        ),
        Err(err) => report.push("content", CheckStatus::Fail, err.to_string()),
    }

    match inspection {
        Err(err @ GenerationError::RelayWorkflow(_)) => {
            report.push("error field", CheckStatus::Fail, err.to_string())
        }
        _ => report.push("error field", CheckStatus::Pass, "no workflow error reported"),
    }

    report
}

/// Check that the configured credential is accepted by the service
pub async fn check_credential(settings: &ServiceSettings) -> DiagnosticReport {
    let mut report = DiagnosticReport::default();
    let Some(api_key) = settings.api_key.as_deref() else {
        report.push(
            "credential",
            CheckStatus::Warn,
            "no API key configured; only the built-in template is available",
        );
        return report;
    };

    let outcome = match Client::with_config(
        api_key,
        settings.model.as_str(),
        settings.base_url.as_str(),
        &settings.client,
    ) {
        Ok(client) => client.generate(&prompts::credential_probe_request()).await,
        Err(err) => Err(err),
    };
    match outcome {
        Ok(_) => report.push("credential", CheckStatus::Pass, "API key accepted"),
        Err(err @ GenerationError::Auth { .. }) => report.push(
            "credential",
            CheckStatus::Fail,
            format!("API key rejected ({err})"),
        ),
        Err(err) => report.push("credential", CheckStatus::Fail, err.to_string()),
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_format_classification() {
        let mut report = DiagnosticReport::default();
        url_format_check("https://r.example.com/webhook-test/1", &mut report);
        url_format_check("https://r.example.com/webhook/1", &mut report);
        url_format_check("https://r.example.com/hooks/1", &mut report);
        let statuses: Vec<_> = report.checks.iter().map(|c| c.status).collect();
        assert_eq!(
            statuses,
            vec![CheckStatus::Fail, CheckStatus::Pass, CheckStatus::Warn]
        );
        assert!(report.has_failures());
    }

    #[tokio::test]
    async fn missing_credential_is_a_warning() {
        let report = check_credential(&ServiceSettings::template_only()).await;
        assert_eq!(report.status_of("credential"), Some(CheckStatus::Warn));
        assert!(!report.has_failures());
    }
}
