use std::env;

/// Where the source document lives and where answers are written.
pub const DEFAULT_BUCKET: &str = "bedrock-lambda-api";
pub const DEFAULT_INPUT_KEY: &str = "summary-input/test-v3.txt";
pub const DEFAULT_OUTPUT_PREFIX: &str = "summary-output";
pub const DEFAULT_MODEL_ID: &str = "amazon.titan-text-express-v1";
pub const DEFAULT_REGION: &str = "us-west-2";

/// Application configuration, injected into the handler at construction.
///
/// Every invocation reads the same input object regardless of the question
/// asked; the input key is configuration, never derived from the request.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bucket holding both the input document and the written answers
    pub bucket: String,
    /// Fixed key of the source document
    pub input_key: String,
    /// Key prefix for written answers
    pub output_prefix: String,
    /// Bedrock model identifier
    pub model_id: String,
    /// AWS region for the Bedrock client
    pub aws_region: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bucket: DEFAULT_BUCKET.to_string(),
            input_key: DEFAULT_INPUT_KEY.to_string(),
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            aws_region: DEFAULT_REGION.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to the
    /// fixed production values. No variable is required.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            bucket: env::var("DOCQA_BUCKET").unwrap_or_else(|_| DEFAULT_BUCKET.to_string()),
            input_key: env::var("DOCQA_INPUT_KEY")
                .unwrap_or_else(|_| DEFAULT_INPUT_KEY.to_string()),
            output_prefix: env::var("DOCQA_OUTPUT_PREFIX")
                .unwrap_or_else(|_| DEFAULT_OUTPUT_PREFIX.to_string()),
            model_id: env::var("DOCQA_MODEL_ID").unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string()),
            aws_region: env::var("DOCQA_MODEL_REGION")
                .unwrap_or_else(|_| DEFAULT_REGION.to_string()),
        }
    }
}
