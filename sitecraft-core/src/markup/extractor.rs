//! Locate candidate markup inside an untyped response payload

use super::MarkupError;
use serde_json::Value;

type ShapeFn = fn(&Value) -> Option<&str>;

/// Ordered shape table; the first shape yielding a non-empty string wins.
const SHAPES: &[(&str, ShapeFn)] = &[
    ("html", |v| field(v, "html")),
    ("code", |v| field(v, "code")),
    ("output", |v| field(v, "output")),
    ("result", |v| field(v, "result")),
    ("generated_text", |v| field(v, "generated_text")),
    ("[0].generated_text", |v| {
        v.as_array()
            .and_then(|items| items.first())
            .and_then(|first| field(first, "generated_text"))
    }),
    ("candidates[0].content.parts[0].text", |v| {
        v.pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
    }),
    ("payload", Value::as_str),
];

fn field<'a>(value: &'a Value, name: &str) -> Option<&'a str> {
    value.get(name).and_then(Value::as_str)
}

/// Candidate text and the shape it was found under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub shape: &'static str,
    pub text: String,
}

/// Find the candidate markup string in `payload`
pub fn extract(payload: &Value) -> Result<Extracted, MarkupError> {
    SHAPES
        .iter()
        .find_map(|&(shape, probe)| {
            probe(payload)
                .filter(|text| !text.trim().is_empty())
                .map(|text| Extracted {
                    shape,
                    text: text.to_string(),
                })
        })
        .ok_or_else(|| MarkupError::ShapeNotFound {
            keys: payload
                .as_object()
                .map(|object| object.keys().cloned().collect())
                .unwrap_or_default(),
        })
}
