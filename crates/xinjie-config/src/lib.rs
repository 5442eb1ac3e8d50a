use std::env;

use serde::{Deserialize, Serialize};

use self::card::CardConfig;
use self::provider::ProvidersConfig;
use self::service::ServiceConfig;

pub mod card;
pub mod provider;
pub mod service;

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub providers: ProvidersConfig,
    pub service: ServiceConfig,
    pub card: CardConfig,
}

impl Config {
    /// Build the configuration from process environment, falling back to defaults
    pub fn new() -> Self {
        Config {
            providers: ProvidersConfig::new(),
            service: ServiceConfig::new(),
            card: CardConfig::default(),
        }
    }

    /// Fill credentials a config file left out from the environment
    pub fn with_env_credentials(self) -> Self {
        Config {
            providers: self.providers.with_env_credentials(),
            ..self
        }
    }
}

/// Read and parse an environment variable, `None` when unset, empty or unparsable
pub(crate) fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .and_then(|v| v.trim().parse().ok())
}
