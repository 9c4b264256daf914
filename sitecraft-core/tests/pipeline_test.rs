use serde_json::json;
use sitecraft_core::config::ServiceSettings;
use sitecraft_core::template::{SectionId, ThemeId};
use sitecraft_core::{GenerationSource, Orchestrator, analyze, compose, generate_from_template};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent";

fn document(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><title>Relay page</title></head>\n<body>\n{body}\n{}\n</body>\n</html>",
        "<section class=\"p-8\"><p>Generated content block.</p></section>\n".repeat(4)
    )
}

fn relay_settings(server: &MockServer) -> ServiceSettings {
    ServiceSettings::relay("test-key", format!("{}/webhook/site", server.uri()))
}

fn direct_settings(server: &MockServer) -> ServiceSettings {
    ServiceSettings::direct("test-key", format!("{}/v1beta", server.uri()))
}

#[test]
fn every_theme_composes_a_complete_document() {
    for theme in ThemeId::ALL {
        let prompt = "Landing page with about, pricing and faq";
        let html = compose(&analyze(prompt, theme.as_str()), prompt);
        assert!(html.starts_with("<!DOCTYPE html>"), "{theme}");
        assert!(html.contains("</html>"), "{theme}");
        assert!(html.contains(theme.palette().primary), "{theme}");
    }
}

#[test]
fn photographer_portfolio_scenario() {
    let prompt = "A modern portfolio for a photographer with a gallery and contact form";
    let config = analyze(prompt, "portfolio");
    assert!(config.sections.contains(&SectionId::Gallery));
    assert!(config.sections.contains(&SectionId::Contact));
    assert_eq!(config.colors, ThemeId::Portfolio.palette());

    let html = compose(&config, prompt);
    assert!(html.contains("<section id=\"gallery\""));
    assert!(html.contains("<section id=\"contact\""));
    assert_eq!(html, generate_from_template(prompt, "portfolio"));
}

#[tokio::test]
async fn relay_output_field_is_trimmed_and_accepted() {
    let server = MockServer::start().await;
    let page = document("<h1>Hello</h1>");
    Mock::given(method("POST"))
        .and(path("/webhook/site"))
        .and(body_partial_json(json!({
            "prompt": "A tech startup",
            "theme": "tech",
            "geminiKey": "test-key"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "output": format!("{page} some trailing prose")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let orchestrator = Orchestrator::from_settings(&relay_settings(&server));
    let result = orchestrator.generate("A tech startup", "tech").await;

    assert_eq!(result.source, GenerationSource::ExternalRelay);
    assert_eq!(result.html, page);
    assert!(result.warnings.is_empty());
}

#[tokio::test]
async fn relay_acknowledgement_falls_back_with_specific_warning() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/webhook/site"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Workflow was started" })),
        )
        .mount(&server)
        .await;

    let orchestrator = Orchestrator::from_settings(&relay_settings(&server));
    let result = orchestrator.generate("A blog about hiking", "blog").await;

    assert_eq!(result.source, GenerationSource::Template);
    assert_eq!(result.html, generate_from_template("A blog about hiking", "blog"));
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("workflow was started"));
}

#[tokio::test]
async fn relay_bare_document_body_is_accepted() {
    let server = MockServer::start().await;
    let page = document("<h1>Bare</h1>");
    Mock::given(method("POST"))
        .and(path("/webhook/site"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page.clone()))
        .mount(&server)
        .await;

    let result = Orchestrator::from_settings(&relay_settings(&server))
        .generate("x", "saas")
        .await;
    assert_eq!(result.source, GenerationSource::ExternalRelay);
    assert_eq!(result.html, page);
}

#[tokio::test]
async fn relay_not_found_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not registered"))
        .mount(&server)
        .await;

    let result = Orchestrator::from_settings(&relay_settings(&server))
        .generate("pricing page", "saas")
        .await;
    assert_eq!(result.source, GenerationSource::Template);
    assert!(result.warnings[0].contains("workflow active"));
}

#[tokio::test]
async fn relay_test_endpoint_failure_suggests_production_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let settings =
        ServiceSettings::relay("test-key", format!("{}/webhook-test/site", server.uri()));
    let result = Orchestrator::from_settings(&settings).generate("x", "tech").await;
    assert_eq!(result.source, GenerationSource::Template);
    assert_eq!(result.warnings.len(), 2);
    assert!(result.warnings[1].contains("/webhook/site"));
}

#[tokio::test]
async fn direct_call_strips_fences() {
    let server = MockServer::start().await;
    let page = document("<h1>Direct</h1>");
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(json!({
            "generationConfig": { "temperature": 0.3, "topK": 20, "maxOutputTokens": 8192 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": format!("```html\n{page}\n```") }] },
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = Orchestrator::from_settings(&direct_settings(&server))
        .generate("An agency site", "portfolio")
        .await;
    assert_eq!(result.source, GenerationSource::ExternalDirect);
    assert_eq!(result.html, page);
}

#[tokio::test]
async fn direct_component_output_is_converted() {
    let server = MockServer::start().await;
    let component = format!(
        "import React from 'react';\n\nexport default function App() {{\n  return (\n    <main className=\"p-8\">{}</main>\n  );\n}}\n",
        "<p className=\"text-lg\">Converted paragraph.</p>".repeat(4)
    );
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": component }] } }]
        })))
        .mount(&server)
        .await;

    let result = Orchestrator::from_settings(&direct_settings(&server))
        .generate("x", "tech")
        .await;
    assert_eq!(result.source, GenerationSource::ExternalDirect);
    assert!(result.html.starts_with("<!DOCTYPE html>"));
    assert!(result.html.contains("<main class=\"p-8\">"));
    assert!(!result.html.contains("className"));
    assert_eq!(result.warnings.len(), 1);
}

#[tokio::test]
async fn rejected_credential_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
        .mount(&server)
        .await;

    let result = Orchestrator::from_settings(&direct_settings(&server))
        .generate("A shop", "ecommerce")
        .await;
    assert_eq!(result.source, GenerationSource::Template);
    assert!(result.warnings[0].contains("API key was rejected"));
}

#[tokio::test]
async fn short_output_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "<html><body>tiny</body></html>" }] } }]
        })))
        .mount(&server)
        .await;

    let result = Orchestrator::from_settings(&direct_settings(&server))
        .generate("x", "blog")
        .await;
    assert_eq!(result.source, GenerationSource::Template);
    assert!(result.warnings[0].contains("too short"));
}

#[tokio::test]
async fn unreachable_service_falls_back() {
    let server = MockServer::start().await;
    let settings = direct_settings(&server);
    drop(server);

    let result = Orchestrator::from_settings(&settings).generate("x", "tech").await;
    assert_eq!(result.source, GenerationSource::Template);
    assert_eq!(result.warnings.len(), 1);
}
