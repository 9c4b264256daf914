use serde::Serialize;
use std::fmt;

/// Which path produced the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GenerationSource {
    Template,
    ExternalDirect,
    ExternalRelay,
}

impl fmt::Display for GenerationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GenerationSource::Template => "template",
            GenerationSource::ExternalDirect => "externalDirect",
            GenerationSource::ExternalRelay => "externalRelay",
        })
    }
}

/// Outcome of one generation request.
///
/// When `source` is external, `html` has already passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    pub html: String,
    pub source: GenerationSource,
    pub warnings: Vec<String>,
}

impl GenerationResult {
    pub fn template(html: String, warnings: Vec<String>) -> Self {
        Self {
            html,
            source: GenerationSource::Template,
            warnings,
        }
    }
}
