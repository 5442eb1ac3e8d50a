use async_trait::async_trait;
use xinjie_config::provider::ProviderConfig;

use super::Remote;
use crate::chat::{ChatRequest, completion_text};
use crate::prompt::validate_text;
use crate::{GenerationError, GenerationResult, Provider, ProviderMetadata, http};

pub const DEFAULT_ENDPOINT: &str = "https://open.bigmodel.cn/api/paas/v4/chat/completions";
pub const DEFAULT_MODEL: &str = "glm-4";

/// ZhipuAI (GLM) through its OpenAI-compatible v4 endpoint
pub struct ZhipuAiProvider {
    remote: Remote,
}

impl ZhipuAiProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self, GenerationError> {
        Ok(Self {
            remote: Remote::new(config, "ZHIPUAI_API_KEY", DEFAULT_ENDPOINT, DEFAULT_MODEL)?,
        })
    }
}

#[async_trait]
impl Provider for ZhipuAiProvider {
    async fn generate(&self, word: &str) -> GenerationResult {
        let remote = &self.remote;

        let request = ChatRequest {
            temperature: Some(0.8),
            ..ChatRequest::new(&remote.model, word)
        };

        let response = remote
            .client
            .post(&remote.endpoint)
            .bearer_auth(&remote.api_key)
            .json(&request)
            .send()
            .await?;

        let json = http::read_json(response).await?;
        validate_text(&completion_text(json)?)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "ZhipuAI".to_string(),
            model: self.remote.model.clone(),
            requires_api_key: true,
        }
    }
}
