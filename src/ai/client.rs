//! Bedrock (Titan text) client module
//!
//! Encapsulates the model invocation for generating answers.

use std::time::Duration;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;
use aws_sdk_bedrockruntime::primitives::Blob;
use tracing::debug;

use crate::core::config::AppConfig;
use crate::core::models::{GenerationResult, TitanRequest, TitanResponse};
use crate::errors::{QaError, Result};
use crate::prompt::build_prompt;

const READ_TIMEOUT: Duration = Duration::from_secs(300);
const MAX_ATTEMPTS: u32 = 3;

/// Which generation result to keep when the service returns several.
///
/// Titan is invoked for a single completion, so the list normally holds one
/// entry and the policies agree. `First` is the intended behavior; `Last`
/// reproduces the legacy loop that overwrote the answer with each result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResultSelection {
    #[default]
    First,
    Last,
}

/// Pick a generation result according to the selection policy.
#[must_use]
pub fn select_result(
    results: &[GenerationResult],
    selection: ResultSelection,
) -> Option<&GenerationResult> {
    match selection {
        ResultSelection::First => results.first(),
        ResultSelection::Last => results.last(),
    }
}

/// Hosted text-generation service.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate an answer to `question` grounded in `document`.
    ///
    /// Returns the whitespace-trimmed answer text.
    async fn generate(&self, document: &str, question: &str) -> Result<String>;
}

/// [`TextGenerator`] backed by Bedrock's Titan text model.
pub struct BedrockGenerator {
    client: aws_sdk_bedrockruntime::Client,
    model_id: String,
    selection: ResultSelection,
}

impl BedrockGenerator {
    /// Build a Bedrock client with the fixed transport configuration:
    /// 300-second read timeout, up to 3 attempts (retry policy is owned by
    /// the SDK, not this crate).
    pub async fn new(config: &AppConfig) -> Self {
        let aws_config = aws_config::defaults(BehaviorVersion::latest())
            .region(aws_config::Region::new(config.aws_region.clone()))
            .timeout_config(
                TimeoutConfig::builder()
                    .read_timeout(READ_TIMEOUT)
                    .build(),
            )
            .retry_config(RetryConfig::standard().with_max_attempts(MAX_ATTEMPTS))
            .load()
            .await;

        Self {
            client: aws_sdk_bedrockruntime::Client::new(&aws_config),
            model_id: config.model_id.clone(),
            selection: ResultSelection::default(),
        }
    }

    /// Override the result-selection policy.
    #[must_use]
    pub fn with_selection(mut self, selection: ResultSelection) -> Self {
        self.selection = selection;
        self
    }
}

#[async_trait]
impl TextGenerator for BedrockGenerator {
    async fn generate(&self, document: &str, question: &str) -> Result<String> {
        let prompt = build_prompt(document, question);
        let body = serde_json::to_vec(&TitanRequest::new(prompt))?;

        let response = self
            .client
            .invoke_model()
            .model_id(&self.model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| QaError::ModelError(e.to_string()))?;

        let parsed: TitanResponse = serde_json::from_slice(response.body().as_ref())
            .map_err(|e| QaError::MalformedResponse(e.to_string()))?;

        let result = select_result(&parsed.results, self.selection)
            .ok_or_else(|| QaError::MalformedResponse("empty results list".to_string()))?;

        debug!(
            token_count = result.token_count,
            completion_reason = result.completion_reason.as_deref(),
            "Model invocation complete"
        );

        Ok(result.output_text.trim().to_string())
    }
}
