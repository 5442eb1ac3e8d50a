//! Chat-completion envelope shared by OpenAI-compatible backends.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::prompt::{PERSONA, instruction};
use crate::GenerationError;

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

/// System persona followed by the user instruction for `word`
pub(crate) fn messages(word: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            role: "system",
            content: PERSONA.to_string(),
        },
        ChatMessage {
            role: "user",
            content: instruction(word),
        },
    ]
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl<'a> ChatRequest<'a> {
    pub fn new(model: &'a str, word: &str) -> Self {
        Self {
            model,
            messages: messages(word),
            temperature: None,
        }
    }
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: Option<String>,
}

/// Extract `choices[0].message.content`
pub(crate) fn completion_text(json: Value) -> Result<String, GenerationError> {
    let response: ChatResponse = serde_json::from_value(json).map_err(|e| {
        GenerationError::MalformedResponse(format!("unexpected chat completion shape: {e}"))
    })?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| {
            GenerationError::MalformedResponse("no choices[0].message.content".to_string())
        })
}
