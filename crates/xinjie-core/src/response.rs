use serde::Serialize;

use crate::{Card, ServiceError};

/// Wire shape of one inbound call: `{"svg": ...}` or `{"error": ...}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InterpretResponse {
    Card { svg: String },
    Error { error: String },
}

impl InterpretResponse {
    pub fn status(&self) -> u16 {
        match self {
            InterpretResponse::Card { .. } => 200,
            InterpretResponse::Error { .. } => 400,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!(r#"{{"error":"{e}"}}"#))
    }
}

impl From<Result<Card, ServiceError>> for InterpretResponse {
    fn from(result: Result<Card, ServiceError>) -> Self {
        match result {
            Ok(card) => InterpretResponse::Card { svg: card.svg },
            Err(e) => InterpretResponse::Error {
                error: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_shape() {
        let response = InterpretResponse::from(Err(ServiceError::InvalidInput));

        assert_eq!(response.status(), 400);
        assert_eq!(response.to_json(), r#"{"error":"请输入词语"}"#);
    }

    #[test]
    fn test_card_shape() {
        let response = InterpretResponse::from(Ok(Card {
            word: "会议".to_string(),
            interpretation: "x".to_string(),
            svg: "<svg/>".to_string(),
        }));

        assert_eq!(response.status(), 200);
        assert_eq!(response.to_json(), r#"{"svg":"<svg/>"}"#);
    }
}
