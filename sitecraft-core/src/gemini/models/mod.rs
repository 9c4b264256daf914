use crate::config::constants::generation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Single user turn with an optional system instruction
    pub fn single_turn(system: Option<&str>, user: impl Into<String>) -> Self {
        Self {
            contents: vec![Content::user_text(user)],
            system_instruction: system.map(Content::system_text),
            generation_config: Some(GenerationConfig::default()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part { text: text.into() }],
        }
    }

    /// System instructions carry no role
    pub fn system_text(text: &str) -> Self {
        Self {
            role: None,
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// Sampling parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: generation::TEMPERATURE,
            top_k: generation::TOP_K,
            top_p: generation::TOP_P,
            max_output_tokens: generation::MAX_OUTPUT_TOKENS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_uses_camel_case_wire_names() {
        let request = GenerateContentRequest::single_turn(Some("be terse"), "hello");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["systemInstruction"], json!({ "parts": [{ "text": "be terse" }] }));
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["generationConfig"]["topK"], 20);
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 8192);
    }
}
