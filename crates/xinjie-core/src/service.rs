use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use xinjie_card::CardRenderer;
use xinjie_config::Config;
use xinjie_config::service::ServiceConfig;
use xinjie_provider::prompt::validate_text;
use xinjie_provider::{GenerationError, GenerationResult, Provider, ProviderRegistry};

use crate::{InterpretResponse, InterpretationRequest, ServiceError};

/// A rendered interpretation
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub word: String,
    pub interpretation: String,
    pub svg: String,
}

/// Interpretation Service.
///
/// Tries the requested provider once, bounded by a timeout and a limit on
/// concurrent remote calls, and falls back to the built-in generator on
/// any failure. Callers never see provider errors.
pub struct InterpretationService {
    registry: Arc<ProviderRegistry>,
    renderer: Arc<CardRenderer>,
    permits: Arc<Semaphore>,
    timeout: Duration,
}

impl InterpretationService {
    pub fn new(registry: ProviderRegistry, renderer: CardRenderer, config: &ServiceConfig) -> Self {
        Self {
            registry: Arc::new(registry),
            renderer: Arc::new(renderer),
            permits: Arc::new(Semaphore::new(config.max_concurrent_requests.max(1))),
            timeout: Duration::from_secs(config.timeout_seconds.max(1)),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            ProviderRegistry::from_config(&config.providers),
            CardRenderer::new(config.card.clone()),
            &config.service,
        )
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    pub fn renderer(&self) -> &CardRenderer {
        &self.renderer
    }

    /// Interpretation text for `word`; never fails.
    ///
    /// An unknown `model_id` goes straight to the built-in generator.
    pub async fn interpret(&self, word: &str, model_id: &str) -> String {
        match self.registry.resolve(model_id) {
            Ok(provider) => self.interpret_with(provider.as_ref(), word).await,
            Err(e) => {
                tracing::warn!("{e}, using local generator");
                self.registry.local().interpret(word)
            }
        }
    }

    /// Validate the model, interpret, and render the card
    pub async fn respond(&self, request: &InterpretationRequest) -> Result<Card, ServiceError> {
        let provider = self
            .registry
            .resolve(request.model_id())
            .map_err(|_| ServiceError::UnsupportedModel(request.model_id().to_string()))?;

        tracing::info!(
            word = request.word(),
            model = request.model_id(),
            "Interpreting"
        );

        let interpretation = self.interpret_with(provider.as_ref(), request.word()).await;
        tracing::debug!("Interpretation: {interpretation}");

        let svg = self.renderer.render(request.word(), &interpretation);

        Ok(Card {
            word: request.word().to_string(),
            interpretation,
            svg,
        })
    }

    /// Inbound entry point: raw word and model id in, `{svg}` or `{error}` out
    pub async fn handle(&self, word: &str, model_id: &str) -> InterpretResponse {
        let result = match InterpretationRequest::new(word, model_id) {
            Ok(request) => self.respond(&request).await,
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            tracing::info!("Rejected request: {e}");
        }

        InterpretResponse::from(result)
    }

    async fn interpret_with(&self, provider: &dyn Provider, word: &str) -> String {
        match self.generate(provider, word).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    provider = %provider.metadata().name,
                    kind = e.kind(),
                    "Generation failed, using local generator: {e}"
                );
                self.registry.local().interpret(word)
            }
        }
    }

    async fn generate(&self, provider: &dyn Provider, word: &str) -> GenerationResult {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| GenerationError::Transport("service is shutting down".to_string()))?;

        let text = tokio::time::timeout(self.timeout, provider.generate(word))
            .await
            .map_err(|_| {
                GenerationError::Transport(format!("no response within {:?}", self.timeout))
            })??;

        validate_text(&text)
    }
}
