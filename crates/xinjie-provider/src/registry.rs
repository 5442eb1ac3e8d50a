use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use xinjie_config::provider::ProvidersConfig;

use crate::providers::{
    GeminiProvider, LocalProvider, OpenAiProvider, QwenProvider, UnavailableProvider,
    ZhipuAiProvider,
};
use crate::{GenerationError, Provider};

/// The fixed set of selectable models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelId {
    /// Built-in generator, selected by `default` or `local`
    Local,
    OpenAi,
    ZhipuAi,
    Qwen,
    Gemini,
}

impl ModelId {
    pub const ALL: [ModelId; 5] = [
        ModelId::Local,
        ModelId::OpenAi,
        ModelId::ZhipuAi,
        ModelId::Qwen,
        ModelId::Gemini,
    ];

    /// Case-insensitive lookup of a model identifier
    pub fn parse(id: &str) -> Option<Self> {
        match id.trim().to_lowercase().as_str() {
            "default" | "local" => Some(ModelId::Local),
            "openai" => Some(ModelId::OpenAi),
            "zhipuai" => Some(ModelId::ZhipuAi),
            "qwen" => Some(ModelId::Qwen),
            "gemini" => Some(ModelId::Gemini),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::Local => "default",
            ModelId::OpenAi => "openai",
            ModelId::ZhipuAi => "zhipuai",
            ModelId::Qwen => "qwen",
            ModelId::Gemini => "gemini",
        }
    }
}

impl FromStr for ModelId {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelId::parse(s).ok_or_else(|| RegistryError::NotFound(s.to_string()))
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("unknown model: {0}")]
    NotFound(String),
}

/// Maps model identifiers to provider instances. Immutable once built.
pub struct ProviderRegistry {
    providers: HashMap<ModelId, Arc<dyn Provider>>,
    local: Arc<LocalProvider>,
}

impl ProviderRegistry {
    /// Registry where only the built-in generator is wired up
    pub fn local_only() -> Self {
        let local = Arc::new(LocalProvider::new());
        let mut providers: HashMap<ModelId, Arc<dyn Provider>> = HashMap::new();
        providers.insert(ModelId::Local, local.clone());

        Self { providers, local }
    }

    /// Build every backend from configuration.
    ///
    /// A backend that cannot be built (missing credential) is still
    /// registered, but every call to it fails with the construction error.
    pub fn from_config(config: &ProvidersConfig) -> Self {
        let mut registry = Self::local_only();

        registry.register(
            ModelId::OpenAi,
            remote("OpenAI", OpenAiProvider::new(&config.openai)),
        );
        registry.register(
            ModelId::ZhipuAi,
            remote("ZhipuAI", ZhipuAiProvider::new(&config.zhipuai)),
        );
        registry.register(
            ModelId::Qwen,
            remote("Qwen", QwenProvider::new(&config.qwen)),
        );
        registry.register(
            ModelId::Gemini,
            remote("Gemini", GeminiProvider::new(&config.gemini)),
        );

        registry
    }

    /// Replace the provider behind `id`
    pub fn register(&mut self, id: ModelId, provider: Arc<dyn Provider>) {
        self.providers.insert(id, provider);
    }

    pub fn resolve(&self, model_id: &str) -> Result<Arc<dyn Provider>, RegistryError> {
        let id: ModelId = model_id.parse()?;
        self.providers
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(model_id.to_string()))
    }

    /// The built-in generator used as universal fallback
    pub fn local(&self) -> &LocalProvider {
        &self.local
    }

    /// Registered model identifiers, in declaration order
    pub fn models(&self) -> Vec<ModelId> {
        ModelId::ALL
            .into_iter()
            .filter(|id| self.providers.contains_key(id))
            .collect()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::local_only()
    }
}

fn remote<P>(name: &str, built: Result<P, GenerationError>) -> Arc<dyn Provider>
where
    P: Provider + 'static,
{
    match built {
        Ok(provider) => {
            tracing::info!("Registered {name} provider");
            Arc::new(provider)
        }
        Err(e) => {
            tracing::warn!("{name} provider unavailable: {e}");
            Arc::new(UnavailableProvider::new(name, e))
        }
    }
}
