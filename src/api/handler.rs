//! Lambda handler - parses the trigger event and runs the four-step flow:
//! fetch input, build prompt, call the model, persist the answer.

use std::sync::Arc;

use chrono::Local;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::helpers;
use crate::ai::{BedrockGenerator, TextGenerator};
use crate::core::config::AppConfig;
use crate::core::models::QuestionRequest;
use crate::errors::QaError;
use crate::storage::{DocumentStore, S3ObjectStore, output_key};

pub use self::function_handler as handler;

/// Orchestrates one question-answering request.
///
/// Holds the configuration plus the two collaborator seams, so tests can run
/// the full flow against stub implementations.
pub struct QaService {
    config: AppConfig,
    store: Arc<dyn DocumentStore>,
    generator: Arc<dyn TextGenerator>,
}

impl QaService {
    #[must_use]
    pub fn new(
        config: AppConfig,
        store: Arc<dyn DocumentStore>,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        Self {
            config,
            store,
            generator,
        }
    }

    /// Run the flow for one trigger event and produce the response envelope.
    ///
    /// Status policy, preserved as observed behavior: a missing or empty
    /// source document is the only 400; a failed model call degrades to a
    /// 200 with an empty answer, and a failed write leaves the 200 intact.
    ///
    /// # Errors
    ///
    /// Returns [`QaError::ParseError`] if the event body is malformed or has
    /// no `message` field. Every other failure is handled inside the flow.
    pub async fn handle(&self, payload: &Value) -> Result<Value, QaError> {
        let request = QuestionRequest::from_event(payload)?;

        let document = match self
            .store
            .fetch(&self.config.bucket, &self.config.input_key)
            .await
        {
            Ok(text) => text,
            Err(QaError::NotFound(location)) => {
                warn!(%location, "Source document not found");
                return Ok(helpers::extraction_failed());
            }
            Err(e) => {
                error!("Error reading source document: {e}");
                return Ok(helpers::extraction_failed());
            }
        };

        let document = document.trim();
        if document.is_empty() {
            warn!("Source document is empty");
            return Ok(helpers::extraction_failed());
        }

        let answer = match self.generator.generate(document, &request.message).await {
            Ok(text) => text,
            Err(e) => {
                error!("Error generating the answer: {e}");
                String::new()
            }
        };

        if answer.is_empty() {
            info!("No answer was generated");
        } else {
            let key = output_key(&self.config.output_prefix, Local::now().time());
            match self
                .store
                .store(&self.config.bucket, &key, answer.clone())
                .await
            {
                Ok(()) => info!(bucket = %self.config.bucket, %key, "Answer saved"),
                Err(e) => error!("Error saving the answer: {e}"),
            }
        }

        Ok(helpers::ok_answer(&answer))
    }
}

/// Lambda handler for the question-answering entrypoint.
///
/// # Errors
///
/// Returns an error only for an unparseable trigger event; that propagates
/// to the Lambda fault channel. All other outcomes are a response envelope.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let config = AppConfig::from_env();
    let correlation_id = Uuid::new_v4();
    info!(%correlation_id, "Received request");

    let store = S3ObjectStore::new(&config).await;
    let generator = BedrockGenerator::new(&config).await;
    let service = QaService::new(config, Arc::new(store), Arc::new(generator));

    service.handle(&event.payload).await.map_err(|e| {
        error!(%correlation_id, "Request failed: {e}");
        Error::from(e.to_string())
    })
}
