use super::error::GenerationError;
use super::result::GenerationSource;
use crate::gemini::Client;
use crate::prompts;
use crate::relay::RelayClient;
use crate::template::ThemeId;
use async_trait::async_trait;
use serde_json::Value;

/// An external path able to return a raw payload for a prompt
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    fn source(&self) -> GenerationSource;

    async fn request(&self, prompt: &str, theme: ThemeId) -> Result<Value, GenerationError>;
}

#[async_trait]
impl GenerationBackend for Client {
    fn source(&self) -> GenerationSource {
        GenerationSource::ExternalDirect
    }

    async fn request(&self, prompt: &str, theme: ThemeId) -> Result<Value, GenerationError> {
        let request = prompts::generation_request(prompt, theme);
        self.generate(&request).await
    }
}

#[async_trait]
impl GenerationBackend for RelayClient {
    fn source(&self) -> GenerationSource {
        GenerationSource::ExternalRelay
    }

    async fn request(&self, prompt: &str, theme: ThemeId) -> Result<Value, GenerationError> {
        self.generate(prompt, theme).await
    }
}
