/// Why a provider could not produce usable text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("authentication error: {0}")]
    Auth(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("quota exceeded: {0}")]
    Quota(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl GenerationError {
    /// Short failure kind for log fields
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationError::Configuration(_) => "configuration",
            GenerationError::Auth(_) => "auth",
            GenerationError::Transport(_) => "transport",
            GenerationError::Quota(_) => "quota",
            GenerationError::MalformedResponse(_) => "malformed_response",
        }
    }
}

impl From<reqwest::Error> for GenerationError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            GenerationError::MalformedResponse(e.to_string())
        } else if e.is_timeout() {
            GenerationError::Transport(format!("request timed out: {e}"))
        } else {
            GenerationError::Transport(e.to_string())
        }
    }
}
