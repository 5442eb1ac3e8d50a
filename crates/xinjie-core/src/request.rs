use unicode_normalization::UnicodeNormalization;

use crate::ServiceError;

/// One inbound interpretation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpretationRequest {
    word: String,
    model_id: String,
}

impl InterpretationRequest {
    /// Normalize the word and reject it when nothing is left
    pub fn new(word: &str, model_id: &str) -> Result<Self, ServiceError> {
        let word = normalize_word(word);
        if word.is_empty() {
            return Err(ServiceError::InvalidInput);
        }

        Ok(Self {
            word,
            model_id: model_id.trim().to_string(),
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }
}

/// NFKC, line breaks removed, surrounding whitespace trimmed
pub fn normalize_word(word: &str) -> String {
    word.nfkc()
        .collect::<String>()
        .replace(['\n', '\r'], "")
        .trim()
        .to_string()
}
