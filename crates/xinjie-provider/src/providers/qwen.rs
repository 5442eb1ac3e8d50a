use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use xinjie_config::provider::ProviderConfig;

use super::Remote;
use crate::chat::{ChatMessage, messages};
use crate::prompt::validate_text;
use crate::{GenerationError, GenerationResult, Provider, ProviderMetadata, http};

pub const DEFAULT_ENDPOINT: &str =
    "https://dashscope.aliyuncs.com/api/v1/services/aigc/text-generation/generation";
pub const DEFAULT_MODEL: &str = "qwen-max";

/// Alibaba DashScope (Qwen) text-generation API
pub struct QwenProvider {
    remote: Remote,
}

#[derive(Serialize)]
struct GenerationRequest<'a> {
    model: &'a str,
    input: GenerationInput,
    parameters: GenerationParameters,
}

#[derive(Serialize)]
struct GenerationInput {
    messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct GenerationParameters {
    result_format: &'static str,
    top_p: f32,
    seed: u64,
    max_tokens: u32,
    temperature: f32,
}

impl<'a> GenerationRequest<'a> {
    fn new(model: &'a str, word: &str) -> Self {
        Self {
            model,
            input: GenerationInput {
                messages: messages(word),
            },
            parameters: GenerationParameters {
                result_format: "message",
                top_p: 0.8,
                seed: 1234,
                max_tokens: 100,
                temperature: 0.8,
            },
        }
    }
}

impl QwenProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self, GenerationError> {
        Ok(Self {
            remote: Remote::new(config, "QWEN_API_KEY", DEFAULT_ENDPOINT, DEFAULT_MODEL)?,
        })
    }
}

/// DashScope answers with `output.text` or, in message format, `output.choices[0].message.content`
fn output_text(json: &Value) -> Result<String, GenerationError> {
    let output = &json["output"];

    output["text"]
        .as_str()
        .or_else(|| output["choices"][0]["message"]["content"].as_str())
        .map(str::to_string)
        .ok_or_else(|| {
            let detail = http::error_message(json).unwrap_or_else(|| "no output text".to_string());
            GenerationError::MalformedResponse(detail)
        })
}

#[async_trait]
impl Provider for QwenProvider {
    async fn generate(&self, word: &str) -> GenerationResult {
        let remote = &self.remote;

        let response = remote
            .client
            .post(&remote.endpoint)
            .bearer_auth(&remote.api_key)
            .header("X-DashScope-SSE", "disable")
            .json(&GenerationRequest::new(&remote.model, word))
            .send()
            .await?;

        let json = http::read_json(response).await?;
        tracing::debug!(request_id = ?json["request_id"].as_str(), "qwen responded");

        validate_text(&output_text(&json)?)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Qwen".to_string(),
            model: self.remote.model.clone(),
            requires_api_key: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_request_shape() {
        let body = serde_json::to_value(GenerationRequest::new("qwen-max", "会议")).unwrap();

        assert_eq!(body["model"], "qwen-max");
        assert_eq!(body["input"]["messages"][0]["role"], "system");
        assert_eq!(body["parameters"]["result_format"], "message");
        assert_eq!(body["parameters"]["max_tokens"], 100);
        assert_eq!(body["parameters"]["seed"], 1234);
    }

    #[test]
    fn test_plain_text_output() {
        let body = json!({ "output": { "text": "会议：互相浪费时间的艺术。", "finish_reason": "stop" } });
        assert_eq!(output_text(&body).unwrap(), "会议：互相浪费时间的艺术。");
    }

    #[test]
    fn test_message_format_output() {
        let body = json!({
            "output": {
                "choices": [
                    { "finish_reason": "stop", "message": { "role": "assistant", "content": "加班：为别人的游艇添砖加瓦。" } }
                ]
            },
            "request_id": "abc"
        });
        assert_eq!(output_text(&body).unwrap(), "加班：为别人的游艇添砖加瓦。");
    }

    #[test]
    fn test_error_envelope_is_malformed() {
        let body = json!({ "code": "InvalidParameter", "message": "Input data may contain inappropriate content." });
        assert_eq!(
            output_text(&body).unwrap_err(),
            GenerationError::MalformedResponse(
                "Input data may contain inappropriate content.".to_string()
            )
        );
    }
}
