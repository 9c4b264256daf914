//! Structural acceptance checks

use super::{MarkupError, has_root_tag};
use crate::config::constants::markup::MIN_DOCUMENT_CHARS;

/// Accept `markup` when it is long enough and carries a root element.
///
/// Length is counted in characters and checked first.
pub fn validate(markup: &str) -> Result<(), MarkupError> {
    let length = markup.chars().count();
    if length < MIN_DOCUMENT_CHARS {
        return Err(MarkupError::TooShort {
            length,
            minimum: MIN_DOCUMENT_CHARS,
        });
    }
    if !has_root_tag(markup) {
        return Err(MarkupError::MissingRootElement);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn padded(len: usize) -> String {
        let prefix = "<html>";
        let suffix = "</html>";
        let filler = "a".repeat(len - prefix.len() - suffix.len());
        format!("{prefix}{filler}{suffix}")
    }

    #[test]
    fn boundary_at_minimum_length() {
        let short = padded(199);
        assert_eq!(short.len(), 199);
        assert_eq!(
            validate(&short),
            Err(MarkupError::TooShort {
                length: 199,
                minimum: 200
            })
        );
        assert_eq!(validate(&padded(200)), Ok(()));
        assert_eq!(validate(&padded(5000)), Ok(()));
    }

    #[test]
    fn long_text_without_root_is_rejected() {
        let text = "<div>".repeat(100);
        assert_eq!(validate(&text), Err(MarkupError::MissingRootElement));
    }

    #[test]
    fn length_counts_characters() {
        let html = format!("<html>{}</html>", "é".repeat(150));
        assert!(html.len() >= 200);
        assert!(matches!(
            validate(&html),
            Err(MarkupError::TooShort { length: 163, .. })
        ));
    }
}
