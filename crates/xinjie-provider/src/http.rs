use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;

use crate::GenerationError;

const MAX_ERROR_BODY_CHARS: usize = 200;

pub(crate) fn client(timeout_seconds: u64) -> Result<reqwest::Client, GenerationError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .build()
        .map_err(|e| GenerationError::Configuration(format!("failed to build HTTP client: {e}")))
}

/// Read the response body and turn it into JSON, classifying non-2xx statuses
pub(crate) async fn read_json(response: reqwest::Response) -> Result<Value, GenerationError> {
    let status = response.status();
    let body = response.text().await?;
    parse_body(status, &body)
}

pub(crate) fn parse_body(status: StatusCode, body: &str) -> Result<Value, GenerationError> {
    if !status.is_success() {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|json| error_message(&json))
            .unwrap_or_else(|| body.chars().take(MAX_ERROR_BODY_CHARS).collect());

        return Err(status_error(status, message));
    }

    serde_json::from_str(body)
        .map_err(|e| GenerationError::MalformedResponse(format!("response is not JSON: {e}")))
}

pub(crate) fn status_error(status: StatusCode, message: String) -> GenerationError {
    let message = format!("HTTP {}: {}", status.as_u16(), message);

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GenerationError::Auth(message),
        StatusCode::TOO_MANY_REQUESTS => GenerationError::Quota(message),
        _ => GenerationError::Transport(message),
    }
}

/// Backend error text, whichever of the common envelopes carries it
pub(crate) fn error_message(json: &Value) -> Option<String> {
    json["error"]["message"]
        .as_str()
        .or_else(|| json["message"].as_str())
        .or_else(|| json["error"].as_str())
        .map(str::to_string)
}
