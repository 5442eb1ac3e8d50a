use std::fmt;

use serde::{Deserialize, Serialize};

use crate::env_parse;

fn default_timeout_seconds() -> u64 {
    15
}

/// Connection settings for one remote text-generation backend.
///
/// `endpoint` and `model` override the backend's built-in defaults when set.
/// `api_key` is never defaulted: a backend without one fails closed.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ProviderConfig {
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
    pub model: Option<String>,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl ProviderConfig {
    /// Read `{PREFIX}_API_KEY`, `{PREFIX}_API_URL`, `{PREFIX}_MODEL` and `{PREFIX}_TIMEOUT_SECONDS`
    pub fn from_env(prefix: &str) -> Self {
        Self {
            api_key: env_parse(&format!("{prefix}_API_KEY")),
            endpoint: env_parse(&format!("{prefix}_API_URL")),
            model: env_parse(&format!("{prefix}_MODEL")),
            timeout_seconds: env_parse(&format!("{prefix}_TIMEOUT_SECONDS"))
                .unwrap_or_else(default_timeout_seconds),
        }
    }

    /// Credential with surrounding whitespace removed, `None` if blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    fn with_env_credential(mut self, prefix: &str) -> Self {
        if self.api_key().is_none() {
            self.api_key = env_parse(&format!("{prefix}_API_KEY"));
        }
        self
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: None,
            model: None,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

// Keeps credentials out of logs.
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &self.api_key().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct ProvidersConfig {
    pub openai: ProviderConfig,
    pub zhipuai: ProviderConfig,
    pub qwen: ProviderConfig,
    pub gemini: ProviderConfig,
}

impl ProvidersConfig {
    pub fn new() -> Self {
        Self {
            openai: ProviderConfig::from_env("OPENAI"),
            zhipuai: ProviderConfig::from_env("ZHIPUAI"),
            qwen: ProviderConfig::from_env("QWEN"),
            gemini: ProviderConfig::from_env("GEMINI"),
        }
    }

    pub fn with_env_credentials(self) -> Self {
        Self {
            openai: self.openai.with_env_credential("OPENAI"),
            zhipuai: self.zhipuai.with_env_credential("ZHIPUAI"),
            qwen: self.qwen.with_env_credential("QWEN"),
            gemini: self.gemini.with_env_credential("GEMINI"),
        }
    }
}
