use async_trait::async_trait;
use xinjie_config::provider::ProviderConfig;

use super::Remote;
use crate::chat::{ChatRequest, completion_text};
use crate::prompt::validate_text;
use crate::{GenerationError, GenerationResult, Provider, ProviderMetadata, http};

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

pub struct OpenAiProvider {
    remote: Remote,
}

impl OpenAiProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self, GenerationError> {
        Ok(Self {
            remote: Remote::new(config, "OPENAI_API_KEY", DEFAULT_ENDPOINT, DEFAULT_MODEL)?,
        })
    }
}

#[async_trait]
impl Provider for OpenAiProvider {
    async fn generate(&self, word: &str) -> GenerationResult {
        let remote = &self.remote;

        let response = remote
            .client
            .post(&remote.endpoint)
            .bearer_auth(&remote.api_key)
            .json(&ChatRequest::new(&remote.model, word))
            .send()
            .await?;

        let json = http::read_json(response).await?;
        validate_text(&completion_text(json)?)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "OpenAI".to_string(),
            model: self.remote.model.clone(),
            requires_api_key: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_fails_closed() {
        let err = OpenAiProvider::new(&ProviderConfig::default())
            .err()
            .expect("provider must not build without a key");
        assert_eq!(
            err,
            GenerationError::Configuration("OPENAI_API_KEY is not set".to_string())
        );
    }

    #[test]
    fn test_overrides_apply() {
        let provider = OpenAiProvider::new(&ProviderConfig {
            api_key: Some("sk-test".to_string()),
            model: Some("gpt-4o-mini".to_string()),
            ..ProviderConfig::default()
        })
        .unwrap();

        assert_eq!(provider.metadata().model, "gpt-4o-mini");
        assert_eq!(provider.remote.endpoint, DEFAULT_ENDPOINT);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let provider = OpenAiProvider::new(&ProviderConfig {
            api_key: Some("sk-test".to_string()),
            endpoint: Some("http://127.0.0.1:1/v1/chat/completions".to_string()),
            timeout_seconds: 2,
            ..ProviderConfig::default()
        })
        .unwrap();

        let err = provider.generate("效率").await.unwrap_err();
        assert_eq!(err.kind(), "transport");
    }
}
