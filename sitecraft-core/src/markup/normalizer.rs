//! Cleaning and bounding of candidate markup.
//!
//! Every step is idempotent, so feeding a normalized document back in returns
//! the same bytes with no new warnings.

use super::{DOCTYPE, MarkupError, has_doctype};
use crate::template::{ThemeId, document_shell};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)```(?:html|jsx|javascript)?\n?").expect("fence pattern"));

static RETURN_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)return\s*\((.*)\)\s*;?\s*\}\s*;?\s*$").expect("return block pattern")
});

static DOCUMENT_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<!doctype html[^>]*>.*</html>").expect("document pattern"));

static ROOT_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<html.*</html>").expect("root pattern"));

type Signal = (&'static str, fn(&str) -> bool);

/// Component-source indicators, each tested independently
const COMPONENT_SIGNALS: &[Signal] = &[
    ("export statement", |t| t.contains("export ")),
    ("import statement", |t| t.contains("import ")),
    ("className attribute", |t| t.contains("className=")),
    ("arrow-function component", |t| {
        t.contains("const ") && t.contains("= () =>")
    }),
    ("function returning markup", |t| {
        t.contains("function ") && t.contains("return (")
    }),
];

/// Normalized document plus advisory notes gathered on the way
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedMarkup {
    pub markup: String,
    pub warnings: Vec<String>,
}

fn component_signals(text: &str) -> Vec<&'static str> {
    COMPONENT_SIGNALS
        .iter()
        .filter(|(_, present)| present(text))
        .map(|(name, _)| *name)
        .collect()
}

/// True when `text` looks like component source rather than a document.
///
/// A document-type declaration anywhere in the text overrides every signal.
pub fn is_component_syntax(text: &str) -> bool {
    !has_doctype(text) && !component_signals(text).is_empty()
}

fn strip_fences(text: &str) -> String {
    CODE_FENCE.replace_all(text, "").trim().to_string()
}

fn convert_component(text: &str, theme: ThemeId) -> Result<String, MarkupError> {
    let stripped: Vec<&str> = text
        .lines()
        .filter(|line| {
            let line = line.trim_start();
            !(line.starts_with("import") || line.starts_with("export"))
        })
        .collect();
    let source = stripped.join("\n").replace("className=", "class=");

    let body = RETURN_BLOCK
        .captures(&source)
        .and_then(|caps| caps.get(1))
        .map(|inner| inner.as_str().trim())
        .filter(|inner| !inner.is_empty())
        .ok_or(MarkupError::ConversionFailed)?;

    Ok(document_shell(&format!("{theme} Website"), body))
}

fn ensure_prolog(text: String) -> String {
    let lower = text.to_ascii_lowercase();
    if !lower.starts_with("<!doctype") && lower.starts_with("<html") {
        format!("{DOCTYPE}\n{text}")
    } else {
        text
    }
}

fn bound_document(text: String) -> String {
    if let Some(span) = DOCUMENT_SPAN.find(&text) {
        if span.start() > 0 || span.end() < text.len() {
            debug!(
                leading = span.start(),
                trailing = text.len() - span.end(),
                "discarding text outside the document"
            );
        }
        return span.as_str().to_string();
    }
    match ROOT_SPAN.find(&text) {
        Some(span) => format!("{DOCTYPE}\n{}", span.as_str()),
        None => text,
    }
}

/// Normalize a candidate returned by an external service.
///
/// Fails only when component source is detected and no renderable block can
/// be recovered from it.
pub fn normalize(candidate: &str, theme: ThemeId) -> Result<NormalizedMarkup, MarkupError> {
    let mut warnings = Vec::new();
    let mut text = strip_fences(candidate);

    let signals = component_signals(&text);
    if !signals.is_empty() {
        if has_doctype(&text) {
            debug!(?signals, "doctype present; keeping content unchanged");
        } else {
            debug!(?signals, "candidate looks like component source");
            text = convert_component(&text, theme)?;
            warnings.push(
                "response used component syntax and was converted to a plain document".to_string(),
            );
        }
    }

    let markup = bound_document(ensure_prolog(text));
    Ok(NormalizedMarkup { markup, warnings })
}
