/// docqa - A Lambda that answers questions about a document stored in S3
/// using Amazon Bedrock.
///
/// Each invocation runs four sequential steps:
/// 1. Fetch the source document from S3
/// 2. Build a question-answering prompt around it
/// 3. Invoke the Titan text model with deterministic sampling
/// 4. Persist the answer back to S3 under a time-derived key
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - S3 for document input and answer output
/// - Bedrock (Titan text) for answer generation
/// - Tokio for async runtime
///
/// The handler is built around two trait seams, [`storage::DocumentStore`]
/// and [`ai::TextGenerator`], so tests can substitute stub collaborators for
/// the real AWS clients.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
///
/// use docqa::api::QaService;
/// use docqa::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Set up structured logging
///     docqa::setup_logging();
///
///     let config = AppConfig::default();
///     let store = docqa::storage::S3ObjectStore::new(&config).await;
///     let generator = docqa::ai::BedrockGenerator::new(&config).await;
///     let service = QaService::new(config, Arc::new(store), Arc::new(generator));
///
///     let event = serde_json::json!({ "body": "{\"message\": \"What is the capital?\"}" });
///     let envelope = service.handle(&event).await?;
///     println!("{envelope}");
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod prompt;
pub mod storage;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called at the start of each Lambda
/// handler.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// docqa::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
