mod gemini;
mod local;
mod openai;
mod qwen;
mod unavailable;
mod zhipuai;

pub use gemini::GeminiProvider;
pub use local::LocalProvider;
pub use openai::OpenAiProvider;
pub use qwen::QwenProvider;
pub use unavailable::UnavailableProvider;
pub use zhipuai::ZhipuAiProvider;

use xinjie_config::provider::ProviderConfig;

use crate::GenerationError;

/// Resolved credentials and endpoint of a remote backend
struct Remote {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    model: String,
}

impl Remote {
    fn new(
        config: &ProviderConfig,
        key_var: &str,
        default_endpoint: &str,
        default_model: &str,
    ) -> Result<Self, GenerationError> {
        let api_key = config
            .api_key()
            .ok_or_else(|| GenerationError::Configuration(format!("{key_var} is not set")))?
            .to_string();

        Ok(Self {
            client: crate::http::client(config.timeout_seconds)?,
            api_key,
            endpoint: config
                .endpoint
                .clone()
                .unwrap_or_else(|| default_endpoint.to_string()),
            model: config
                .model
                .clone()
                .unwrap_or_else(|| default_model.to_string()),
        })
    }
}
