//! Interpretation Service behavior against scripted providers

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use xinjie_card::CardRenderer;
use xinjie_config::card::CardConfig;
use xinjie_config::provider::ProviderConfig;
use xinjie_config::service::ServiceConfig;
use xinjie_provider::{
    GenerationError, GenerationResult, LocalProvider, ModelId, OpenAiProvider, Provider,
    ProviderMetadata, ProviderRegistry,
};

use crate::{InterpretResponse, InterpretationRequest, InterpretationService, ServiceError};

/// Returns a fixed result and counts how often it was asked
struct Scripted {
    result: GenerationResult,
    delay: Duration,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl Scripted {
    fn new(result: GenerationResult) -> Arc<Self> {
        Self::delayed(result, Duration::ZERO)
    }

    fn delayed(result: GenerationResult, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            result,
            delay,
            calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Most calls that were running at the same time
    fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Provider for Scripted {
    async fn generate(&self, _word: &str) -> GenerationResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(running, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.result.clone()
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Scripted".to_string(),
            model: "scripted".to_string(),
            requires_api_key: false,
        }
    }
}

fn service_with(id: ModelId, provider: Arc<dyn Provider>) -> InterpretationService {
    let mut registry = ProviderRegistry::local_only();
    registry.register(id, provider);

    InterpretationService::new(
        registry,
        CardRenderer::new(CardConfig::default()),
        &ServiceConfig {
            timeout_seconds: 1,
            ..ServiceConfig::default()
        },
    )
}

fn local(word: &str) -> String {
    LocalProvider::new().interpret(word)
}

#[tokio::test]
async fn test_remote_success_is_returned() {
    let provider = Scripted::new(Ok("会议：把一个人的决定拆成十个人的责任。".to_string()));
    let service = service_with(ModelId::Qwen, provider.clone());

    let text = service.interpret("会议", "qwen").await;
    assert_eq!(text, "会议：把一个人的决定拆成十个人的责任。");
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_interpret_never_empty_for_any_model() {
    let service = InterpretationService::new(
        ProviderRegistry::from_config(&Default::default()),
        CardRenderer::new(CardConfig::default()),
        &ServiceConfig::default(),
    );

    for model in ["default", "openai", "ZhipuAI", "qwen", "gemini", "nope", ""] {
        for word in ["委婉", "某生僻词", "KPI"] {
            let text = service.interpret(word, model).await;
            assert!(!text.is_empty(), "{model}/{word}");
        }
    }
}

#[tokio::test]
async fn test_unknown_model_is_unsupported() {
    let service = service_with(ModelId::Qwen, Scripted::new(Ok("x".to_string())));
    let request = InterpretationRequest::new("效率", "llama").unwrap();

    assert_eq!(
        service.respond(&request).await,
        Err(ServiceError::UnsupportedModel("llama".to_string()))
    );
}

#[tokio::test]
async fn test_empty_word_never_reaches_provider() {
    let provider = Scripted::new(Ok("x".to_string()));
    let service = service_with(ModelId::OpenAi, provider.clone());

    let response = service.handle("   ", "openai").await;

    assert_eq!(
        response,
        InterpretResponse::Error {
            error: "请输入词语".to_string()
        }
    );
    assert_eq!(response.status(), 400);
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_transport_failure_falls_back_to_local() {
    let provider = OpenAiProvider::new(&ProviderConfig {
        api_key: Some("sk-test".to_string()),
        endpoint: Some("http://127.0.0.1:1/v1/chat/completions".to_string()),
        timeout_seconds: 2,
        ..ProviderConfig::default()
    })
    .unwrap();
    let service = service_with(ModelId::OpenAi, Arc::new(provider));

    for word in ["委婉", "某生僻词"] {
        assert_eq!(service.interpret(word, "openai").await, local(word));
    }
}

#[tokio::test]
async fn test_every_failure_kind_falls_back() {
    let failures = [
        GenerationError::Configuration("QWEN_API_KEY is not set".to_string()),
        GenerationError::Auth("HTTP 401".to_string()),
        GenerationError::Transport("connection reset".to_string()),
        GenerationError::Quota("HTTP 429".to_string()),
        GenerationError::MalformedResponse("no output".to_string()),
    ];

    for failure in failures {
        let service = service_with(ModelId::Qwen, Scripted::new(Err(failure)));
        assert_eq!(service.interpret("加班", "qwen").await, local("加班"));
    }
}

#[tokio::test]
async fn test_sentinel_and_empty_text_are_rejected() {
    for text in ["抱歉，生成解释时出现错误：boom", "  ", "“抱歉，返回格式异常”"] {
        let service = service_with(ModelId::Gemini, Scripted::new(Ok(text.to_string())));
        assert_eq!(service.interpret("团建", "gemini").await, local("团建"));
    }
}

#[tokio::test]
async fn test_slow_provider_times_out() {
    let provider = Scripted::delayed(Ok("too late".to_string()), Duration::from_secs(5));
    let service = service_with(ModelId::ZhipuAi, provider.clone());

    let started = std::time::Instant::now();
    let text = service.interpret("效率", "zhipuai").await;

    assert_eq!(text, local("效率"));
    assert_eq!(provider.calls(), 1);
    assert!(started.elapsed() < Duration::from_secs(4));
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let provider = Scripted::delayed(Ok("同一个答案。".to_string()), Duration::from_millis(50));
    let service = Arc::new(InterpretationService::new(
        {
            let mut registry = ProviderRegistry::local_only();
            registry.register(ModelId::Qwen, provider.clone());
            registry
        },
        CardRenderer::new(CardConfig::default()),
        &ServiceConfig {
            max_concurrent_requests: 2,
            ..ServiceConfig::default()
        },
    ));

    let mut handles = Vec::new();
    for _ in 0..6 {
        let service = Arc::clone(&service);
        handles.push(tokio::spawn(async move {
            service.interpret("会议", "qwen").await
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), "同一个答案。");
    }
    assert_eq!(provider.calls(), 6);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_remote_calls_respect_concurrency_limit() {
    let provider = Scripted::delayed(Ok("排队。".to_string()), Duration::from_millis(100));
    let service = Arc::new(InterpretationService::new(
        {
            let mut registry = ProviderRegistry::local_only();
            registry.register(ModelId::OpenAi, provider.clone());
            registry
        },
        CardRenderer::new(CardConfig::default()),
        &ServiceConfig {
            max_concurrent_requests: 2,
            ..ServiceConfig::default()
        },
    ));

    let handles: Vec<_> = (0..6)
        .map(|_| {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.interpret("排队", "openai").await })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap(), "排队。");
    }
    assert_eq!(provider.calls(), 6);
    assert!(provider.peak() >= 1);
    assert!(provider.peak() <= 2, "peak was {}", provider.peak());
}

#[tokio::test]
async fn test_default_model_uses_local_generator() {
    let service = service_with(ModelId::Qwen, Scripted::new(Ok("remote".to_string())));
    let request = InterpretationRequest::new("委婉", "Default").unwrap();

    let card = service.respond(&request).await.unwrap();
    assert_eq!(card.interpretation, "刺向他人时, 决定在剑刃上撒上止痛药。");
}

#[tokio::test]
async fn test_handle_renders_card() {
    let service = service_with(
        ModelId::Qwen,
        Scripted::new(Ok("“强制性的快乐，预算内的友谊。”".to_string())),
    );

    let response = service.handle("团建", "QWEN").await;
    let InterpretResponse::Card { svg } = &response else {
        panic!("expected a card, got {response:?}");
    };

    assert_eq!(response.status(), 200);
    assert!(svg.contains(">团建</text>"));
    assert!(svg.contains(">强制性的快乐，</text>"));
    assert!(svg.contains(">预算内的友谊。</text>"));
    assert!(!svg.contains('“'));
}
