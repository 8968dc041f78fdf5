use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::QaError;

/// Question payload carried in the trigger event's `body` field.
#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    pub message: String,
}

impl QuestionRequest {
    /// Extract the request from a raw trigger event.
    ///
    /// The event carries a `body` field holding a JSON string of shape
    /// `{"message": "..."}`. A missing body or malformed JSON is an
    /// unrecoverable request fault, not a degraded-answer case.
    ///
    /// # Errors
    ///
    /// Returns [`QaError::ParseError`] if `body` is absent, not a string, or
    /// does not decode to a payload with a `message` field.
    pub fn from_event(payload: &Value) -> Result<Self, QaError> {
        let body = payload
            .get("body")
            .and_then(Value::as_str)
            .ok_or_else(|| QaError::ParseError("event has no string `body` field".to_string()))?;

        serde_json::from_str(body)
            .map_err(|e| QaError::ParseError(format!("invalid request body: {e}")))
    }
}

/// Sampling configuration sent with every Titan invocation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextGenerationConfig {
    pub max_token_count: u32,
    pub stop_sequences: Vec<String>,
    pub temperature: f32,
    pub top_p: f32,
}

/// Request body for the Titan text model.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitanRequest {
    pub input_text: String,
    pub text_generation_config: TextGenerationConfig,
}

impl TitanRequest {
    /// Wrap a prompt with the fixed deterministic sampling configuration:
    /// greedy decoding (temperature 0, topP 1), 4096-token output cap, no
    /// stop sequences.
    #[must_use]
    pub fn new(prompt: String) -> Self {
        Self {
            input_text: prompt,
            text_generation_config: TextGenerationConfig {
                max_token_count: 4096,
                stop_sequences: Vec::new(),
                temperature: 0.0,
                top_p: 1.0,
            },
        }
    }
}

/// Response body from the Titan text model.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitanResponse {
    pub results: Vec<GenerationResult>,
}

/// One generated completion.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub output_text: String,
    #[serde(default)]
    pub token_count: Option<u32>,
    #[serde(default)]
    pub completion_reason: Option<String>,
}
