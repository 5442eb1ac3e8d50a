use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use xinjie_config::provider::ProviderConfig;

use super::Remote;
use crate::prompt::{single_turn, validate_text};
use crate::{GenerationError, GenerationResult, Provider, ProviderMetadata, http};

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Google Gemini `generateContent`
pub struct GeminiProvider {
    remote: Remote,
}

#[derive(Serialize)]
struct ContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

impl ContentRequest {
    fn new(word: &str) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: single_turn(word),
                }],
            }],
        }
    }
}

impl GeminiProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self, GenerationError> {
        Ok(Self {
            remote: Remote::new(config, "GEMINI_API_KEY", DEFAULT_ENDPOINT, DEFAULT_MODEL)?,
        })
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.remote.endpoint.trim_end_matches('/'),
            self.remote.model
        )
    }
}

/// First candidate's first text part
fn candidate_text(json: &Value) -> Result<String, GenerationError> {
    if let Some(text) = json["candidates"][0]["content"]["parts"][0]["text"].as_str() {
        return Ok(text.to_string());
    }

    let detail = match json["promptFeedback"]["blockReason"].as_str() {
        Some(reason) => format!("prompt blocked: {reason}"),
        None => "no candidates[0].content.parts[0].text".to_string(),
    };
    Err(GenerationError::MalformedResponse(detail))
}

#[async_trait]
impl Provider for GeminiProvider {
    async fn generate(&self, word: &str) -> GenerationResult {
        let remote = &self.remote;

        let response = remote
            .client
            .post(self.url())
            .header("x-goog-api-key", remote.api_key.as_str())
            .json(&ContentRequest::new(word))
            .send()
            .await?;

        let json = http::read_json(response).await?;
        validate_text(&candidate_text(&json)?)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Gemini".to_string(),
            model: self.remote.model.clone(),
            requires_api_key: true,
        }
    }
}
