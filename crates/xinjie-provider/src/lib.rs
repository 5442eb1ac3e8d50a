mod chat;
mod error;
mod http;
pub mod prompt;
pub mod providers;
mod registry;

pub use error::GenerationError;
pub use providers::{
    GeminiProvider, LocalProvider, OpenAiProvider, QwenProvider, UnavailableProvider,
    ZhipuAiProvider,
};
pub use registry::{ModelId, ProviderRegistry, RegistryError};

/// Outcome of one generation attempt: interpretation text or a typed failure
pub type GenerationResult = Result<String, GenerationError>;

/// Text-generation backend interface
#[async_trait::async_trait]
pub trait Provider: Send + Sync {
    /// Produce a one-sentence interpretation of `word`
    async fn generate(&self, word: &str) -> GenerationResult;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub model: String,
    pub requires_api_key: bool,
}
