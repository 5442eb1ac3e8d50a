use serde::{Deserialize, Serialize};

use crate::env_parse;

fn default_timeout_seconds() -> u64 {
    20
}

fn default_max_concurrent_requests() -> usize {
    8
}

fn default_model() -> String {
    "default".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ServiceConfig {
    /// Upper bound for one remote generation call, fallback kicks in after it
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Remote calls allowed in flight at once
    #[serde(default = "default_max_concurrent_requests")]
    pub max_concurrent_requests: usize,
    /// Model used when the caller names none
    #[serde(default = "default_model")]
    pub default_model: String,
}

impl ServiceConfig {
    pub fn new() -> Self {
        Self {
            timeout_seconds: env_parse("XINJIE_TIMEOUT_SECONDS")
                .unwrap_or_else(default_timeout_seconds),
            max_concurrent_requests: env_parse("XINJIE_MAX_CONCURRENT_REQUESTS")
                .unwrap_or_else(default_max_concurrent_requests),
            default_model: env_parse("XINJIE_DEFAULT_MODEL").unwrap_or_else(default_model),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
            max_concurrent_requests: default_max_concurrent_requests(),
            default_model: default_model(),
        }
    }
}
