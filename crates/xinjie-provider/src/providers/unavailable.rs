use async_trait::async_trait;

use crate::{GenerationError, GenerationResult, Provider, ProviderMetadata};

/// Stand-in for a backend that could not be constructed; every call fails with the construction error
pub struct UnavailableProvider {
    name: String,
    reason: GenerationError,
}

impl UnavailableProvider {
    pub fn new(name: impl Into<String>, reason: GenerationError) -> Self {
        Self {
            name: name.into(),
            reason,
        }
    }
}

#[async_trait]
impl Provider for UnavailableProvider {
    async fn generate(&self, _word: &str) -> GenerationResult {
        Err(self.reason.clone())
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: self.name.clone(),
            model: String::new(),
            requires_api_key: true,
        }
    }
}
