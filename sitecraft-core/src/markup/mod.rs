//! Turning service payloads into accepted documents.
//!
//! The stages run in a fixed order: [`extractor::extract`] finds the candidate
//! text inside an arbitrary payload, [`normalizer::normalize`] cleans and
//! bounds it, and [`validator::validate`] applies the structural checks.

pub mod extractor;
pub mod normalizer;
pub mod validator;

pub use extractor::{Extracted, extract};
pub use normalizer::{NormalizedMarkup, is_component_syntax, normalize};
pub use validator::validate;

use thiserror::Error;

/// Reasons a candidate cannot become an accepted document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    #[error("no markup found in response (fields present: {})", keys_or_none(.keys))]
    ShapeNotFound { keys: Vec<String> },

    #[error("response contained component source that could not be converted to a document")]
    ConversionFailed,

    #[error("document too short ({length} characters, minimum {minimum})")]
    TooShort { length: usize, minimum: usize },

    #[error("document has no <html> root element")]
    MissingRootElement,
}

fn keys_or_none(keys: &[String]) -> String {
    if keys.is_empty() {
        "none".to_string()
    } else {
        keys.join(", ")
    }
}

pub(crate) const DOCTYPE: &str = "<!DOCTYPE html>";

/// Case-insensitive check for a document-type declaration anywhere in `text`
pub(crate) fn has_doctype(text: &str) -> bool {
    text.to_ascii_lowercase().contains("<!doctype html")
}

/// Case-insensitive check for an opening root tag anywhere in `text`
pub(crate) fn has_root_tag(text: &str) -> bool {
    text.to_ascii_lowercase().contains("<html")
}
