use super::backend::GenerationBackend;
use super::error::GenerationError;
use super::result::{GenerationResult, GenerationSource};
use crate::config::ServiceSettings;
use crate::gemini::Client;
use crate::markup::{extract, normalize, validate};
use crate::relay::{self, RelayClient};
use crate::template::{ThemeId, generate_from_template};
use tracing::{debug, info, warn};

/// Runs one generation request to completion.
///
/// The external path (when configured) is tried once; any failure falls back
/// to the template composer, so [`Orchestrator::generate`] always returns a
/// document.
pub struct Orchestrator {
    backend: Option<Box<dyn GenerationBackend>>,
    /// Advice appended to the warnings whenever the external path fails
    failure_hints: Vec<String>,
    setup_warnings: Vec<String>,
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("source", &self.planned_source())
            .finish_non_exhaustive()
    }
}

impl Orchestrator {
    pub fn template_only() -> Self {
        Self {
            backend: None,
            failure_hints: Vec::new(),
            setup_warnings: Vec::new(),
        }
    }

    pub fn with_backend(backend: Box<dyn GenerationBackend>) -> Self {
        Self {
            backend: Some(backend),
            ..Self::template_only()
        }
    }

    /// Choose the path from resolved settings.
    ///
    /// No credential selects the template; a credential alone selects the
    /// direct call; a credential and relay URL select the relay.
    pub fn from_settings(settings: &ServiceSettings) -> Self {
        let Some(api_key) = settings.api_key.as_deref() else {
            debug!("no credential configured; template path only");
            return Self::template_only();
        };

        let built: Result<(Box<dyn GenerationBackend>, Vec<String>), GenerationError> =
            match settings.relay_url.as_deref() {
                Some(url) => RelayClient::new(url, api_key, &settings.client).map(|client| {
                    let hints = if relay::is_test_endpoint(url) {
                        vec![format!(
                            "Relay URL uses a test endpoint that only answers while the workflow editor is listening; use {} instead.",
                            relay::production_url(url)
                        )]
                    } else {
                        Vec::new()
                    };
                    (Box::new(client) as Box<dyn GenerationBackend>, hints)
                }),
                None => Client::with_config(
                    api_key,
                    settings.model.as_str(),
                    settings.base_url.as_str(),
                    &settings.client,
                )
                .map(|client| (Box::new(client) as Box<dyn GenerationBackend>, Vec::new())),
            };

        match built {
            Ok((backend, failure_hints)) => Self {
                backend: Some(backend),
                failure_hints,
                setup_warnings: Vec::new(),
            },
            Err(err) => {
                warn!(%err, "external path unavailable");
                Self {
                    setup_warnings: vec![err.advisory()],
                    ..Self::template_only()
                }
            }
        }
    }

    /// Source used when the external path succeeds
    pub fn planned_source(&self) -> GenerationSource {
        self.backend
            .as_ref()
            .map_or(GenerationSource::Template, |backend| backend.source())
    }

    /// Generate a document for `prompt` with the named theme
    pub async fn generate(&self, prompt: &str, theme: &str) -> GenerationResult {
        let mut warnings = self.setup_warnings.clone();
        let theme_id = match theme.parse::<ThemeId>() {
            Ok(id) => id,
            Err(err) => {
                warnings.push(format!("{err}; using the {} theme", ThemeId::Portfolio));
                ThemeId::Portfolio
            }
        };

        if let Some(backend) = self.backend.as_deref() {
            match run_external(backend, prompt, theme_id).await {
                Ok((html, mut notes)) => {
                    info!(
                        source = %backend.source(),
                        chars = html.chars().count(),
                        "external document accepted"
                    );
                    warnings.append(&mut notes);
                    return GenerationResult {
                        html,
                        source: backend.source(),
                        warnings,
                    };
                }
                Err(err) => {
                    warn!(
                        %err,
                        source = %backend.source(),
                        "external generation failed; using template"
                    );
                    warnings.push(err.advisory());
                    warnings.extend(self.failure_hints.iter().cloned());
                }
            }
        }

        let html = generate_from_template(prompt, theme_id.as_str());
        info!(theme = %theme_id, chars = html.chars().count(), "template document composed");
        GenerationResult::template(html, warnings)
    }
}

/// External call, then extract, normalize and validate
async fn run_external(
    backend: &dyn GenerationBackend,
    prompt: &str,
    theme: ThemeId,
) -> Result<(String, Vec<String>), GenerationError> {
    let payload = backend.request(prompt, theme).await?;
    let extracted = extract(&payload)?;
    debug!(shape = extracted.shape, chars = extracted.text.len(), "extracted candidate");
    let normalized = normalize(&extracted.text, theme)?;
    validate(&normalized.markup)?;
    Ok((normalized.markup, normalized.warnings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{Value, json};

    struct Canned(Result<Value, GenerationError>);

    #[async_trait]
    impl GenerationBackend for Canned {
        fn source(&self) -> GenerationSource {
            GenerationSource::ExternalRelay
        }

        async fn request(&self, _prompt: &str, _theme: ThemeId) -> Result<Value, GenerationError> {
            self.0.clone()
        }
    }

    fn page() -> String {
        format!(
            "<!DOCTYPE html>\n<html><head><title>x</title></head><body>{}</body></html>",
            "<p>content</p>".repeat(20)
        )
    }

    #[tokio::test]
    async fn no_backend_uses_template() {
        let result = Orchestrator::template_only().generate("a blog", "blog").await;
        assert_eq!(result.source, GenerationSource::Template);
        assert!(result.warnings.is_empty());
        assert_eq!(result.html, generate_from_template("a blog", "blog"));
    }

    #[tokio::test]
    async fn accepted_payload_keeps_external_source() {
        let orchestrator =
            Orchestrator::with_backend(Box::new(Canned(Ok(json!({ "html": page() })))));
        let result = orchestrator.generate("x", "tech").await;
        assert_eq!(result.source, GenerationSource::ExternalRelay);
        assert_eq!(result.html, page());
    }

    #[tokio::test]
    async fn every_failure_falls_back() {
        let failures = vec![
            Err(GenerationError::Transport("down".into())),
            Err(GenerationError::Auth { status: 401 }),
            Err(GenerationError::RateLimited),
            Ok(json!({ "status": "ok" })),
            Ok(json!({ "html": "export default () => <div className=\"x\"/>;" })),
            Ok(json!({ "html": "<html>short</html>" })),
        ];
        for outcome in failures {
            let orchestrator = Orchestrator::with_backend(Box::new(Canned(outcome)));
            let result = orchestrator.generate("pricing page", "saas").await;
            assert_eq!(result.source, GenerationSource::Template);
            assert_eq!(result.html, generate_from_template("pricing page", "saas"));
            assert_eq!(result.warnings.len(), 1, "{:?}", result.warnings);
        }
    }

    #[tokio::test]
    async fn unknown_theme_is_reported() {
        let result = Orchestrator::template_only().generate("x", "neon").await;
        assert_eq!(result.html, generate_from_template("x", "portfolio"));
        assert_eq!(
            result.warnings,
            vec!["unknown theme 'neon'; using the portfolio theme".to_string()]
        );
    }

    #[test]
    fn settings_select_the_path() {
        assert_eq!(
            Orchestrator::from_settings(&ServiceSettings::template_only()).planned_source(),
            GenerationSource::Template
        );
        assert_eq!(
            Orchestrator::from_settings(&ServiceSettings::direct("k", "http://localhost:1"))
                .planned_source(),
            GenerationSource::ExternalDirect
        );
        assert_eq!(
            Orchestrator::from_settings(&ServiceSettings::relay(
                "k",
                "http://localhost:1/webhook/x"
            ))
            .planned_source(),
            GenerationSource::ExternalRelay
        );
    }
}
